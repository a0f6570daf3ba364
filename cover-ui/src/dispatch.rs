//! Submission lifecycle shared by every network-backed action.
//!
//! A dispatch validates first, then marks itself in flight, shows the pending
//! status (and overlay, for blocking actions), performs exactly one call and
//! settles on one terminal branch. The overlay and the in-flight flag are held
//! by guards so both are released on every failure path.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use dioxus_logger::tracing::{debug, info, warn};
use shared_types::ApiOutcome;

use crate::error::ActionError;

/// Delay between a sub-form success message and the page reload.
pub const RELOAD_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Neutral => "",
            StatusTone::Success => "success",
            StatusTone::Error => "error",
        }
    }
}

/// Inline status indicator contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Neutral,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Error,
        }
    }
}

/// Text shown inside the full-viewport busy overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayCopy {
    pub headline: &'static str,
    pub subtext: &'static str,
}

/// Page-level side effects the dispatcher needs.
#[async_trait(?Send)]
pub trait PageHost {
    fn set_status(&self, status: StatusLine);
    fn show_overlay(&self, copy: OverlayCopy);
    fn hide_overlay(&self);
    /// Mirrors the dispatcher's in-flight flag so controls can be disabled.
    fn set_busy(&self, busy: bool);
    fn alert(&self, message: &str);
    fn reload(&self);
    async fn sleep_ms(&self, ms: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessPolicy {
    /// Show the server message (or `fallback`), wait, then reload.
    AnnounceThenReload {
        fallback: &'static str,
        delay_ms: u32,
    },
    /// Reload straight away; the overlay goes with the old page.
    ReloadNow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report in the status indicator. `fallback` covers a server failure
    /// without error text; transport failures read `Error: <detail>`.
    Status { fallback: &'static str },
    /// Report with a blocking alert.
    Alert {
        fallback: &'static str,
        transport_message: &'static str,
    },
}

/// Everything about an action except its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPlan {
    pub name: &'static str,
    pub pending: Option<&'static str>,
    pub overlay: Option<OverlayCopy>,
    pub on_success: SuccessPolicy,
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Another action was still in flight; nothing happened.
    Busy,
    /// Local validation failed; no request was issued.
    Rejected(ActionError),
    Succeeded,
    Failed(ActionError),
}

/// Single-flight action runner. Clones share the in-flight flag.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    in_flight: Rc<Cell<bool>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn dispatch<H, R, V, C, Fut>(
        &self,
        host: &H,
        plan: &ActionPlan,
        validate: V,
        call: C,
    ) -> DispatchOutcome
    where
        H: PageHost,
        V: FnOnce() -> Result<R, ActionError>,
        C: FnOnce(R) -> Fut,
        Fut: Future<Output = Result<ApiOutcome, ActionError>>,
    {
        if self.is_in_flight() {
            debug!("{}: ignored, another action is in flight", plan.name);
            return DispatchOutcome::Busy;
        }

        let request = match validate() {
            Ok(request) => request,
            Err(err) => {
                host.set_status(StatusLine::error(err.to_string()));
                return DispatchOutcome::Rejected(err);
            }
        };

        let flight = FlightGuard::acquire(&self.in_flight, host);
        if let Some(pending) = plan.pending {
            host.set_status(StatusLine::neutral(pending));
        }
        let overlay = plan.overlay.map(|copy| OverlayGuard::show(host, copy));

        info!("{}: submitting", plan.name);
        let result = call(request)
            .await
            .and_then(|outcome| outcome.into_result().map_err(ActionError::Server));

        match result {
            Ok(message) => {
                info!("{}: succeeded", plan.name);
                if let SuccessPolicy::AnnounceThenReload { fallback, delay_ms } = plan.on_success {
                    host.set_status(StatusLine::success(
                        message.unwrap_or_else(|| fallback.to_string()),
                    ));
                    host.sleep_ms(delay_ms).await;
                }
                if let Some(overlay) = overlay {
                    overlay.hand_off();
                }
                flight.hand_off();
                host.reload();
                DispatchOutcome::Succeeded
            }
            Err(err) => {
                warn!("{}: failed: {}", plan.name, err);
                drop(overlay);
                drop(flight);
                report_failure(host, &plan.on_failure, &err);
                DispatchOutcome::Failed(err)
            }
        }
    }

    /// Full-page submission: the browser navigates instead of us awaiting a
    /// response, so the overlay and busy flag are left for the next page.
    pub fn navigate<H, R, V, N>(
        &self,
        host: &H,
        plan: &ActionPlan,
        validate: V,
        navigate: N,
    ) -> DispatchOutcome
    where
        H: PageHost,
        V: FnOnce() -> Result<R, ActionError>,
        N: FnOnce(R) -> Result<(), ActionError>,
    {
        if self.is_in_flight() {
            debug!("{}: ignored, another action is in flight", plan.name);
            return DispatchOutcome::Busy;
        }

        let request = match validate() {
            Ok(request) => request,
            Err(err) => {
                host.set_status(StatusLine::error(err.to_string()));
                return DispatchOutcome::Rejected(err);
            }
        };

        let flight = FlightGuard::acquire(&self.in_flight, host);
        if let Some(pending) = plan.pending {
            host.set_status(StatusLine::neutral(pending));
        }
        let overlay = plan.overlay.map(|copy| OverlayGuard::show(host, copy));

        info!("{}: navigating", plan.name);
        match navigate(request) {
            Ok(()) => {
                if let Some(overlay) = overlay {
                    overlay.hand_off();
                }
                flight.hand_off();
                DispatchOutcome::Succeeded
            }
            Err(err) => {
                warn!("{}: navigation failed: {}", plan.name, err);
                drop(overlay);
                drop(flight);
                report_failure(host, &plan.on_failure, &err);
                DispatchOutcome::Failed(err)
            }
        }
    }
}

fn report_failure<H: PageHost>(host: &H, policy: &FailurePolicy, err: &ActionError) {
    match *policy {
        FailurePolicy::Status { fallback } => {
            let text = match err {
                ActionError::Server(_) => err.server_message().unwrap_or(fallback).to_string(),
                other => format!("Error: {other}"),
            };
            host.set_status(StatusLine::error(text));
        }
        FailurePolicy::Alert {
            fallback,
            transport_message,
        } => {
            let text = match err {
                ActionError::Server(_) => {
                    format!("Error: {}", err.server_message().unwrap_or(fallback))
                }
                _ => transport_message.to_string(),
            };
            host.alert(&text);
        }
    }
}

/// Holds the dispatcher's in-flight flag; clears it on drop.
struct FlightGuard<'a, H: PageHost> {
    flag: Rc<Cell<bool>>,
    host: &'a H,
    armed: bool,
}

impl<'a, H: PageHost> FlightGuard<'a, H> {
    fn acquire(flag: &Rc<Cell<bool>>, host: &'a H) -> Self {
        flag.set(true);
        host.set_busy(true);
        Self {
            flag: Rc::clone(flag),
            host,
            armed: true,
        }
    }

    /// Keep the flag set; the page is being replaced.
    fn hand_off(mut self) {
        self.armed = false;
    }
}

impl<H: PageHost> Drop for FlightGuard<'_, H> {
    fn drop(&mut self) {
        if self.armed {
            self.flag.set(false);
            self.host.set_busy(false);
        }
    }
}

/// A visible busy overlay; removed on drop unless handed off to a reload.
pub struct OverlayGuard<'a, H: PageHost> {
    host: &'a H,
    armed: bool,
}

impl<'a, H: PageHost> OverlayGuard<'a, H> {
    pub fn show(host: &'a H, copy: OverlayCopy) -> Self {
        host.show_overlay(copy);
        Self { host, armed: true }
    }

    /// Leave the overlay up; page replacement discards it.
    pub fn hand_off(mut self) {
        self.armed = false;
    }
}

impl<H: PageHost> Drop for OverlayGuard<'_, H> {
    fn drop(&mut self) {
        if self.armed {
            self.host.hide_overlay();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::test_support::{HostEvent, MockHost};
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    const PLAN: ActionPlan = ActionPlan {
        name: "test",
        pending: Some("Working..."),
        overlay: Some(OverlayCopy {
            headline: "Busy",
            subtext: "Hold on",
        }),
        on_success: SuccessPolicy::AnnounceThenReload {
            fallback: "Done",
            delay_ms: RELOAD_DELAY_MS,
        },
        on_failure: FailurePolicy::Status { fallback: "Failed" },
    };

    #[test]
    fn rejected_validation_never_calls() {
        let host = MockHost::default();
        let dispatcher = Dispatcher::new();
        let called = Cell::new(false);

        let outcome = block_on(dispatcher.dispatch(
            &host,
            &PLAN,
            || Err::<(), _>(ValidationError::MissingLinkUrl.into()),
            |_| {
                called.set(true);
                async { Ok(ApiOutcome::succeeded("x")) }
            },
        ));

        assert!(matches!(outcome, DispatchOutcome::Rejected(_)));
        assert!(!called.get());
        assert_eq!(
            host.events(),
            vec![HostEvent::Status(StatusLine::error("Please enter a LoRA URL"))]
        );
        assert!(!dispatcher.is_in_flight());
    }

    #[test]
    fn success_announces_waits_then_reloads_once() {
        let host = MockHost::default();
        let dispatcher = Dispatcher::new();

        let outcome = block_on(dispatcher.dispatch(
            &host,
            &PLAN,
            || Ok(()),
            |_| async { Ok(ApiOutcome::succeeded("Saved")) },
        ));

        assert_eq!(outcome, DispatchOutcome::Succeeded);
        assert_eq!(
            host.events(),
            vec![
                HostEvent::Busy(true),
                HostEvent::Status(StatusLine::neutral("Working...")),
                HostEvent::OverlayShown("Busy"),
                HostEvent::Status(StatusLine::success("Saved")),
                HostEvent::Slept(RELOAD_DELAY_MS),
                HostEvent::Reload,
            ]
        );
        assert_eq!(host.reload_count(), 1);
        assert!(dispatcher.is_in_flight());
    }

    #[test]
    fn dispatch_after_reload_request_is_busy() {
        let host = MockHost::default();
        let dispatcher = Dispatcher::new();
        let sent = Cell::new(0);
        let send = |_: ()| {
            sent.set(sent.get() + 1);
            async { Ok(ApiOutcome::succeeded("Saved")) }
        };

        let first = block_on(dispatcher.dispatch(&host, &PLAN, || Ok(()), send));
        let second = block_on(dispatcher.dispatch(&host, &PLAN, || Ok(()), send));

        assert_eq!(first, DispatchOutcome::Succeeded);
        assert_eq!(second, DispatchOutcome::Busy);
        assert_eq!(sent.get(), 1);
        assert!(!host.events().contains(&HostEvent::Busy(false)));
    }

    #[test]
    fn server_failure_removes_overlay_and_reports_text() {
        let host = MockHost::default();
        let dispatcher = Dispatcher::new();

        let outcome = block_on(dispatcher.dispatch(
            &host,
            &PLAN,
            || Ok(()),
            |_| async { Ok(ApiOutcome::failed("disk full")) },
        ));

        assert_eq!(
            outcome,
            DispatchOutcome::Failed(ActionError::Server(Some("disk full".to_string())))
        );
        assert!(host.events().contains(&HostEvent::OverlayHidden));
        assert_eq!(host.last_status(), Some(StatusLine::error("disk full")));
        assert_eq!(host.reload_count(), 0);
        assert_eq!(host.overlay_balance(), 0);
    }

    #[test]
    fn server_failure_without_text_uses_fallback() {
        let host = MockHost::default();
        let outcome = block_on(Dispatcher::new().dispatch(
            &host,
            &PLAN,
            || Ok(()),
            |_| async { Ok(ApiOutcome::default()) },
        ));

        assert_eq!(outcome, DispatchOutcome::Failed(ActionError::Server(None)));
        assert_eq!(host.last_status(), Some(StatusLine::error("Failed")));
    }

    #[test]
    fn transport_failure_is_prefixed() {
        let host = MockHost::default();
        block_on(Dispatcher::new().dispatch(
            &host,
            &PLAN,
            || Ok(()),
            |_| async { Err(ActionError::Transport("connection refused".to_string())) },
        ));

        assert_eq!(
            host.last_status(),
            Some(StatusLine::error("Error: connection refused"))
        );
        assert_eq!(host.overlay_balance(), 0);
    }

    #[test]
    fn alert_policy_alerts_instead_of_status() {
        let host = MockHost::default();
        let plan = ActionPlan {
            pending: None,
            on_success: SuccessPolicy::ReloadNow,
            on_failure: FailurePolicy::Alert {
                fallback: "Unknown error",
                transport_message: "Try again.",
            },
            ..PLAN
        };

        block_on(Dispatcher::new().dispatch(
            &host,
            &plan,
            || Ok(()),
            |_| async { Err(ActionError::Decode("not json".to_string())) },
        ));

        assert_eq!(host.alerts(), vec!["Try again.".to_string()]);
        assert_eq!(host.last_status(), None);
    }

    #[test]
    fn reload_now_keeps_overlay_for_page_replacement() {
        let host = MockHost::default();
        let plan = ActionPlan {
            on_success: SuccessPolicy::ReloadNow,
            ..PLAN
        };

        block_on(Dispatcher::new().dispatch(
            &host,
            &plan,
            || Ok(()),
            |_| async { Ok(ApiOutcome::succeeded("ok")) },
        ));

        assert_eq!(host.overlay_balance(), 1);
        assert_eq!(host.reload_count(), 1);
    }

    #[test]
    fn second_dispatch_while_in_flight_is_busy() {
        let host = MockHost::default();
        let dispatcher = Dispatcher::new();
        let nested = RefCell::new(None);

        block_on(dispatcher.dispatch(
            &host,
            &PLAN,
            || Ok(()),
            |_| {
                let inner = dispatcher
                    .dispatch(
                        &host,
                        &PLAN,
                        || Ok(()),
                        |_| async { Ok(ApiOutcome::succeeded("inner")) },
                    )
                    .now_or_never();
                *nested.borrow_mut() = inner;
                async { Ok(ApiOutcome::succeeded("outer")) }
            },
        ));

        assert_eq!(nested.into_inner(), Some(DispatchOutcome::Busy));
        assert_eq!(host.reload_count(), 1);
    }

    #[test]
    fn navigate_hands_off_overlay_and_busy_flag() {
        let host = MockHost::default();
        let dispatcher = Dispatcher::new();

        let outcome = dispatcher.navigate(&host, &PLAN, || Ok(()), |_| Ok(()));

        assert_eq!(outcome, DispatchOutcome::Succeeded);
        assert!(dispatcher.is_in_flight());
        assert_eq!(host.overlay_balance(), 1);
        assert_eq!(
            dispatcher.navigate(&host, &PLAN, || Ok(()), |_| Ok(())),
            DispatchOutcome::Busy
        );
    }

    #[test]
    fn navigate_failure_releases_everything() {
        let host = MockHost::default();
        let dispatcher = Dispatcher::new();

        let outcome = dispatcher.navigate(&host, &PLAN, || Ok(()), |_| {
            Err(ActionError::Browser("form missing".to_string()))
        });

        assert!(matches!(outcome, DispatchOutcome::Failed(_)));
        assert!(!dispatcher.is_in_flight());
        assert_eq!(host.overlay_balance(), 0);
        assert_eq!(
            host.last_status(),
            Some(StatusLine::error("Error: form missing"))
        );
    }
}
