//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use showcase_core::AppConfig;

use crate::commands::ApiOptions;

const NOTICE_MS: u32 = 2_500;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Simulated API latency
    pub latency_ms: u32,
    /// Make every mocked request fail
    pub mock_failure: RwSignal<bool>,
    /// Mirrors the `data-reduce-motion` attribute
    pub reduce_motion: RwSignal<bool>,
    /// Transient message shown in the corner - read
    pub notice: ReadSignal<Option<String>>,
    /// Transient message shown in the corner - write
    set_notice: WriteSignal<Option<String>>,
    notice_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let (notice, set_notice) = signal(None);
        Self {
            latency_ms: config.mock_latency_ms,
            mock_failure: RwSignal::new(config.mock_failure),
            reduce_motion: RwSignal::new(false),
            notice,
            set_notice,
            notice_seq: RwSignal::new(0),
        }
    }

    pub fn api(&self) -> ApiOptions {
        ApiOptions {
            latency_ms: self.latency_ms,
            fail: self.mock_failure.get_untracked(),
        }
    }

    /// Show a notice; it clears itself unless replaced first
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("notice: {}", message);
        self.set_notice.set(Some(message));
        self.notice_seq.update(|n| *n += 1);

        let seq = self.notice_seq.get_untracked();
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            if ctx.notice_seq.get_untracked() == seq {
                ctx.set_notice.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
