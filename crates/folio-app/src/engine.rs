//! Engine - owns the page state, the services, and the dispatch loop
//!
//! The engine is constructed once per page view. It discovers the page
//! registry, seeds the load-time state, and then processes messages to
//! completion: update → view sync → effects, with async work (submission,
//! conversion) awaited inline and its outcome fed back as a follow-up
//! message. Re-entrancy is prevented by the disabled triggering controls,
//! so one dispatch never overlaps another.

use std::collections::VecDeque;

use chrono::Datelike;
use folio_core::prelude::*;

use crate::handler::{update, Task, UpdateAction};
use crate::message::Message;
use crate::page::{self, PageRegistry};
use crate::services::{DomSurface, PdfConverter, PdfOptions, Transport};
use crate::state::AppState;
use crate::view;

/// Orchestration engine for one page view.
pub struct Engine<D, T, P>
where
    D: DomSurface,
    T: Transport,
    P: PdfConverter,
{
    /// TEA application state (the Model)
    pub state: AppState,

    dom: D,
    transport: T,
    converter: P,
    pdf_options: PdfOptions,
}

impl<D, T, P> Engine<D, T, P>
where
    D: DomSurface,
    T: Transport,
    P: PdfConverter,
{
    /// Create an engine over a page surface and its collaborators.
    ///
    /// Discovery runs here: controllers whose elements are absent stay
    /// disabled for the lifetime of this engine.
    pub fn new(dom: D, transport: T, converter: P) -> Self {
        let registry = PageRegistry::discover(&dom);
        info!(
            menu = registry.menu.is_some(),
            form = registry.form.is_some(),
            export = registry.export.is_some(),
            tabs = registry.tabs.len(),
            sections = registry.sections.len(),
            "page discovered"
        );
        Self {
            state: AppState::new(registry),
            dom,
            transport,
            converter,
            pdf_options: PdfOptions::default(),
        }
    }

    /// Override the conversion configuration.
    pub fn with_pdf_options(mut self, options: PdfOptions) -> Self {
        self.pdf_options = options;
        self
    }

    /// Run the load-time work: stamp the footer year and seed the nav
    /// highlighter from the URL fragment before any scroll occurs.
    pub async fn boot(&mut self) {
        if self.state.page.footer_year {
            let year = chrono::Local::now().year().to_string();
            self.dom.set_text(page::FOOTER_YEAR, &year);
        }

        let fragment = self.dom.fragment();
        self.dispatch(Message::PageLoaded { fragment }).await;
    }

    /// Process one message to completion, including every follow-up it
    /// produces. The view is synchronized after each state transition and
    /// before effects run, so a busy label is visible before its async
    /// work starts and focus lands on elements already revealed.
    pub async fn dispatch(&mut self, message: Message) {
        let mut queue = VecDeque::from([message]);

        while let Some(message) = queue.pop_front() {
            let result = update(&mut self.state, message);
            view::apply(&self.state, &mut self.dom);

            if let Some(follow_up) = result.message {
                queue.push_back(follow_up);
            }
            for action in result.actions {
                if let Some(outcome) = self.run_action(action).await {
                    queue.push_back(outcome);
                }
            }
        }
    }

    /// Read access to the page surface, mainly for embedders and tests.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    async fn run_action(&mut self, action: UpdateAction) -> Option<Message> {
        match action {
            UpdateAction::Focus { id } => {
                self.dom.focus(&id);
                None
            }
            UpdateAction::ScrollIntoView { id } => {
                self.dom.scroll_into_view(&id);
                None
            }
            UpdateAction::ReplaceFragment { id } => {
                self.dom.replace_fragment(&id);
                None
            }
            UpdateAction::ResetFormFields => {
                for field in folio_core::types::FormField::ALL {
                    self.dom.set_value(field.input_id(), "");
                }
                None
            }
            UpdateAction::Alert { message } => {
                self.dom.alert(&message);
                None
            }
            UpdateAction::ConfirmPrintFallback { message } => {
                if self.dom.confirm(&message) {
                    self.dom.print();
                }
                None
            }
            UpdateAction::Print => {
                self.dom.print();
                None
            }
            UpdateAction::SpawnTask(task) => Some(self.run_task(task).await),
        }
    }

    /// Run a background task and translate its outcome into a follow-up
    /// message. Both arms always produce a message, which is what
    /// guarantees the triggering control is restored on every exit path.
    async fn run_task(&mut self, task: Task) -> Message {
        match task {
            Task::SubmitForm { endpoint, values } => {
                match self.transport.submit(&endpoint, &values).await {
                    Ok(receipt) => Message::SubmissionDelivered {
                        status: receipt.status,
                    },
                    Err(err) => Message::SubmissionFailed {
                        error: err.to_string(),
                    },
                }
            }
            Task::ExportPdf => {
                if !self.converter.ready().await {
                    return Message::ConverterMissing;
                }
                match self.converter.render_page(&self.pdf_options).await {
                    Ok(()) => Message::ExportCompleted,
                    Err(err) => Message::ExportFailed {
                        error: err.to_string(),
                    },
                }
            }
        }
    }
}
