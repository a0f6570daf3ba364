//! Recording host and scripted API for exercising actions without a browser.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use shared_types::{ApiOutcome, LinkLoraRequest, LoraListResponse, LoraSummary, RegenerateRequest};

use crate::api::{CoverApi, UploadRequest};
use crate::dispatch::{OverlayCopy, PageHost, StatusLine};
use crate::error::ActionError;
use crate::result::actions::ResultHost;

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Status(StatusLine),
    OverlayShown(&'static str),
    OverlayHidden,
    Busy(bool),
    Alert(String),
    Reload,
    /// Simulated clock: the delay is recorded and returns immediately.
    Slept(u32),
    Clipboard(String),
    Download { href: String, filename: String },
}

#[derive(Default)]
pub struct MockHost {
    events: RefCell<Vec<HostEvent>>,
    pub clipboard_denied: Cell<bool>,
}

impl MockHost {
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    fn push(&self, event: HostEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn reload_count(&self) -> usize {
        self.count(|e| matches!(e, HostEvent::Reload))
    }

    /// Overlays shown minus overlays hidden.
    pub fn overlay_balance(&self) -> isize {
        let shown = self.count(|e| matches!(e, HostEvent::OverlayShown(_))) as isize;
        let hidden = self.count(|e| matches!(e, HostEvent::OverlayHidden)) as isize;
        shown - hidden
    }

    pub fn last_status(&self) -> Option<StatusLine> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            HostEvent::Status(status) => Some(status.clone()),
            _ => None,
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Alert(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&HostEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }
}

#[async_trait(?Send)]
impl PageHost for MockHost {
    fn set_status(&self, status: StatusLine) {
        self.push(HostEvent::Status(status));
    }

    fn show_overlay(&self, copy: OverlayCopy) {
        self.push(HostEvent::OverlayShown(copy.headline));
    }

    fn hide_overlay(&self) {
        self.push(HostEvent::OverlayHidden);
    }

    fn set_busy(&self, busy: bool) {
        self.push(HostEvent::Busy(busy));
    }

    fn alert(&self, message: &str) {
        self.push(HostEvent::Alert(message.to_string()));
    }

    fn reload(&self) {
        self.push(HostEvent::Reload);
    }

    async fn sleep_ms(&self, ms: u32) {
        self.push(HostEvent::Slept(ms));
    }
}

#[async_trait(?Send)]
impl ResultHost for MockHost {
    async fn write_clipboard(&self, text: &str) -> Result<(), ActionError> {
        if self.clipboard_denied.get() {
            return Err(ActionError::Browser("clipboard permission denied".to_string()));
        }
        self.push(HostEvent::Clipboard(text.to_string()));
        Ok(())
    }

    fn start_download(&self, href: &str, filename: &str) -> Result<(), ActionError> {
        self.push(HostEvent::Download {
            href: href.to_string(),
            filename: filename.to_string(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Upload(String),
    Link(LinkLoraRequest),
    Regenerate(RegenerateRequest),
    ListLoras,
}

/// Replies with queued results in order; an empty queue is a transport error.
#[derive(Default)]
pub struct MockApi {
    replies: RefCell<VecDeque<Result<ApiOutcome, ActionError>>>,
    calls: RefCell<Vec<ApiCall>>,
    /// Served by `list_loras`.
    pub saved: RefCell<Vec<LoraSummary>>,
    pub list_unreachable: Cell<bool>,
}

impl MockApi {
    pub fn replying(reply: Result<ApiOutcome, ActionError>) -> Self {
        let api = Self::default();
        api.replies.borrow_mut().push_back(reply);
        api
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn next_reply(&self, call: ApiCall) -> Result<ApiOutcome, ActionError> {
        self.calls.borrow_mut().push(call);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ActionError::Transport("no scripted reply".to_string())))
    }
}

#[async_trait(?Send)]
impl CoverApi for MockApi {
    type Blob = Vec<u8>;

    async fn list_loras(&self) -> Result<LoraListResponse, ActionError> {
        self.calls.borrow_mut().push(ApiCall::ListLoras);
        if self.list_unreachable.get() {
            return Err(ActionError::Transport("HTTP error: 503".to_string()));
        }
        Ok(LoraListResponse {
            loras: self.saved.borrow().clone(),
        })
    }

    async fn upload_lora(&self, upload: UploadRequest<Vec<u8>>) -> Result<ApiOutcome, ActionError> {
        self.next_reply(ApiCall::Upload(upload.file_name))
    }

    async fn add_lora_link(&self, link: &LinkLoraRequest) -> Result<ApiOutcome, ActionError> {
        self.next_reply(ApiCall::Link(link.clone()))
    }

    async fn regenerate(&self, request: &RegenerateRequest) -> Result<ApiOutcome, ActionError> {
        self.next_reply(ApiCall::Regenerate(request.clone()))
    }
}
