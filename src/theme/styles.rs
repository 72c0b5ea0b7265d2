//! Global CSS styles for the Flash USDT page.
//!
//! Hover lifts, the floating hero card, fade-in sections and the overlay
//! animations are all declared here; no component animates styles by hand.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0b0f14;
  --bg-card: #121821;
  --border: #1f2a36;

  --accent: #00d4aa;
  --accent-glow: rgba(0, 212, 170, 0.3);
  --amber: #f7b733;

  --success: #28a745;
  --danger: #dc3545;
  --danger-bg: #f8d7da;
  --danger-text: #721c24;
  --danger-border: #f5c6cb;

  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-dark: #1a1a1a;
  --text-muted: #6c757d;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  line-height: 1.6;
}

.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
  outline: none;
}

.page.scroll-locked {
  overflow: hidden;
}

/* === Navigation === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 1000;
  background: rgba(11, 15, 20, 0.9);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1100px;
  margin: 0 auto;
  padding: 1rem 1.5rem;
}

.nav-logo {
  color: var(--accent);
  font-weight: 700;
  font-size: 1.25rem;
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.hamburger.active span:nth-child(1) {
  transform: rotate(-45deg) translate(-5px, 6px);
}

.hamburger.active span:nth-child(2) {
  opacity: 0;
}

.hamburger.active span:nth-child(3) {
  transform: rotate(45deg) translate(-5px, -6px);
}

@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-menu {
    display: none;
  }

  .nav-menu.active {
    display: flex;
    position: absolute;
    top: 100%;
    left: 0;
    width: 100%;
    background: var(--bg-card);
    flex-direction: column;
    padding: 1rem;
    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.3);
  }
}

/* === Hero === */
.hero {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  max-width: 1100px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.hero-title {
  font-size: 3rem;
  line-height: 1.1;
}

.gradient-text {
  background: linear-gradient(90deg, var(--accent), var(--amber));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.caret {
  color: var(--accent);
  animation: blink 1s step-end infinite;
}

.hero-subtitle {
  color: var(--text-secondary);
  margin: 1rem 0 2rem;
}

.hero-cta {
  display: inline-block;
  text-decoration: none;
}

.floating-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 2rem 3rem;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  animation: float 3s ease-in-out infinite;
}

.floating-card:hover {
  animation-duration: 1s;
}

.floating-amount {
  font-size: 1.5rem;
  font-weight: 700;
}

/* === Sections === */
.packages-section,
.steps-section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.section-header {
  text-align: center;
  margin-bottom: 2.5rem;
}

.section-header p {
  color: var(--text-secondary);
}

.animate-in {
  animation: fadeInUp 0.6s ease-out both;
}

/* === Package Cards === */
.packages-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
  gap: 1.5rem;
}

.package-card {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 2rem 1.5rem;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.package-card:hover {
  transform: translateY(-10px) scale(1.02);
  box-shadow: 0 10px 30px var(--accent-glow);
}

.package-card.popular {
  border-color: var(--amber);
  transform: scale(1.05);
}

.package-card.popular:hover {
  transform: translateY(-10px) scale(1.05);
}

.popular-badge,
.discount-badge {
  position: absolute;
  top: -12px;
  padding: 0.2rem 0.8rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--text-dark);
}

.popular-badge {
  left: 1rem;
  background: var(--amber);
}

.discount-badge {
  right: 1rem;
  background: var(--accent);
}

.package-amount {
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
}

.package-amount .amount {
  font-size: 2rem;
  font-weight: 700;
}

.currency {
  color: var(--accent);
  font-weight: 600;
}

.package-price {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.price {
  font-size: 1.5rem;
  color: var(--amber);
}

.original-price {
  color: var(--text-muted);
  text-decoration: line-through;
}

.discount {
  color: var(--accent);
  font-size: 0.875rem;
}

.package-features {
  list-style: none;
  color: var(--text-secondary);
  flex: 1;
}

.package-actions {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

/* === Steps === */
.steps-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
}

.step-card {
  padding: 1.5rem;
  background: var(--bg-card);
  border-radius: var(--radius);
  text-align: center;
}

.step-number {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: var(--accent);
  color: var(--text-dark);
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.footer {
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-ghost {
  padding: 0.75rem 1.5rem;
  border-radius: 8px;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: var(--text-dark);
  border: none;
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 15px var(--accent-glow);
}

.btn-primary:disabled {
  opacity: 0.7;
  cursor: not-allowed;
}

.btn-secondary {
  background: transparent;
  color: var(--text-muted);
  border: 1px solid var(--text-muted);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: none;
  font-size: 0.875rem;
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}

.loading {
  display: inline-block;
  width: 14px;
  height: 14px;
  border: 2px solid rgba(0, 0, 0, 0.2);
  border-top-color: var(--text-dark);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
  vertical-align: middle;
}

/* === Overlays === */
.overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(5px);
}

.overlay.modal {
  z-index: 2000;
}

.overlay.notification-overlay {
  z-index: 3000;
}

.overlay-body {
  width: 90%;
  max-width: 480px;
}

.modal-content {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
  animation: slideIn 0.3s ease-out;
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.package-summary {
  padding: 1rem;
  margin-bottom: 1.5rem;
  border: 1px solid var(--border);
  border-radius: 8px;
}

.order-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.input-hint {
  color: var(--text-muted);
}

.input-field {
  padding: 0.75rem;
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text-primary);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.form-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

.error-message {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin: 1rem 0;
  padding: 1rem;
  background: var(--danger-bg);
  color: var(--danger-text);
  border: 1px solid var(--danger-border);
  border-radius: 8px;
}

.success-notification,
.error-notification {
  background: white;
  padding: 2rem;
  border-radius: var(--radius);
  text-align: center;
  animation: slideIn 0.3s ease-out;
}

.success-notification h3,
.error-notification h3 {
  margin-bottom: 1rem;
  color: var(--text-dark);
}

.success-notification p,
.error-notification p {
  color: var(--text-muted);
  margin-bottom: 1.5rem;
}

.success-icon,
.error-icon {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.success-icon {
  color: var(--success);
}

.error-notification .error-icon {
  color: var(--danger);
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 20px;
  bottom: 20px;
  z-index: 4000;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.toast {
  background: #333;
  color: white;
  padding: 12px 20px;
  border-radius: 8px;
  animation: slideInRight 0.3s ease-out;
}

/* === Animations === */
@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slideIn {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slideInRight {
  from { transform: translateX(100%); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-12px); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes blink {
  50% { opacity: 0; }
}
"#;
