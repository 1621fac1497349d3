//! Hosted remote-session backend (declared, not implemented).
//!
//! Will drive a provider-hosted browser session; every operation currently
//! fails fast with a typed `Unsupported` error.

use crate::computer::{Computer, ScrollDirection};
use crate::config::SessionConfig;
use crate::error::{AutomationError, Result};
use crate::observation::Observation;

const BACKEND: &str = "remote-session";

pub struct HostedSessionComputer {
    #[allow(dead_code)] // session parameters for the eventual provider client
    config: SessionConfig,
}

impl HostedSessionComputer {
    pub fn new(config: SessionConfig) -> Self {
        tracing::warn!(
            initial_location = %config.initial_location,
            "the remote-session backend is declared but not implemented"
        );
        Self { config }
    }

    fn unsupported(&self, operation: &'static str) -> AutomationError {
        AutomationError::Unsupported {
            backend: BACKEND,
            operation,
        }
    }
}

impl Computer for HostedSessionComputer {
    fn screen_size(&self) -> Result<(u32, u32)> {
        Err(self.unsupported("screen_size"))
    }

    fn click_at(&mut self, _x: i32, _y: i32) -> Result<Observation> {
        Err(self.unsupported("click_at"))
    }

    fn hover_at(&mut self, _x: i32, _y: i32) -> Result<Observation> {
        Err(self.unsupported("hover_at"))
    }

    fn type_text_at(
        &mut self,
        _x: i32,
        _y: i32,
        _text: &str,
        _press_enter: bool,
        _clear_before_typing: bool,
    ) -> Result<Observation> {
        Err(self.unsupported("type_text_at"))
    }

    fn scroll_document(&mut self, _direction: ScrollDirection) -> Result<Observation> {
        Err(self.unsupported("scroll_document"))
    }

    fn scroll_at(
        &mut self,
        _x: i32,
        _y: i32,
        _direction: ScrollDirection,
        _magnitude: i32,
    ) -> Result<Observation> {
        Err(self.unsupported("scroll_at"))
    }

    fn wait_five_seconds(&mut self) -> Result<Observation> {
        Err(self.unsupported("wait_five_seconds"))
    }

    fn go_back(&mut self) -> Result<Observation> {
        Err(self.unsupported("go_back"))
    }

    fn go_forward(&mut self) -> Result<Observation> {
        Err(self.unsupported("go_forward"))
    }

    fn search(&mut self) -> Result<Observation> {
        Err(self.unsupported("search"))
    }

    fn navigate(&mut self, _url: &str) -> Result<Observation> {
        Err(self.unsupported("navigate"))
    }

    fn key_combination(&mut self, _keys: &[String]) -> Result<Observation> {
        Err(self.unsupported("key_combination"))
    }

    fn drag_and_drop(
        &mut self,
        _x: i32,
        _y: i32,
        _dest_x: i32,
        _dest_y: i32,
    ) -> Result<Observation> {
        Err(self.unsupported("drag_and_drop"))
    }

    fn current_state(&mut self) -> Result<Observation> {
        Err(self.unsupported("current_state"))
    }

    fn close(&mut self) -> Result<()> {
        Err(self.unsupported("close"))
    }
}
