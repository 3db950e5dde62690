use contracts::shared::simulation::Delay;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// `setTimeout`-backed latency for the simulated pipelines
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn wait(&self, millis: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(millis)
    }
}
