//! Animated package amount.
//!
//! Counts up from zero to the catalog amount when the card mounts.

use std::time::Duration;

use dioxus::prelude::*;
use flashorder_core::effects::{parse_amount, CounterAnimation, COUNTER_TICK};

const COUNT_DURATION: Duration = Duration::from_millis(2000);

#[component]
pub fn AmountCounter(amount: &'static str) -> Element {
    let mut counter =
        use_signal(|| parse_amount(amount).map(|target| CounterAnimation::new(target, COUNT_DURATION)));
    let mut text = use_signal(|| "0".to_string());

    use_future(move || async move {
        if counter.peek().is_none() {
            text.set(amount.to_string());
            return;
        }
        loop {
            tokio::time::sleep(COUNTER_TICK).await;
            let mut guard = counter.write();
            let Some(anim) = guard.as_mut() else { break };
            let frame = anim.tick();
            let done = anim.is_done();
            drop(guard);
            text.set(frame);
            if done {
                break;
            }
        }
    });

    rsx! {
        span { class: "amount", "{text}" }
    }
}
