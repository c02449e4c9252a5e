// File: src/runtime.rs
// Purpose: Single-consumer event loop driving the forms and page behaviors

use anyhow::Result;
use pagekit_forms::{
    ContactForm, Deferred, DeferredEffect, FieldId, FormId, NewsletterForm, NewsletterOutcome,
    SubmissionTransport, SubmitOutcome, SubmitRequest, TransportError,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;
use tracing::{debug, error, info, trace, warn};

use crate::config::PageConfig;
use crate::dom::{Dom, DomHandle, ImageView};
use crate::events::{PageEvent, UserEvent};
use crate::nav::{self, PageLayout};

/// Owns all page state and reacts to one event at a time
///
/// Work that has to wait (transport, timers, debounce) runs as a spawned task
/// that posts its result back into the queue, so state is only ever touched
/// from here.
pub struct PageRuntime {
    config: PageConfig,
    layout: PageLayout,
    dom: DomHandle,
    contact: ContactForm<DomHandle>,
    newsletter: NewsletterForm<DomHandle>,
    transport: Arc<dyn SubmissionTransport>,
    tx: UnboundedSender<PageEvent>,
    rx: UnboundedReceiver<PageEvent>,
    /// Spawned tasks that have not reported back yet
    pending: usize,
    resize_generation: u64,
    /// Resize bursts that ran to the end of their quiet period
    resizes_settled: u64,
    fade_pending: BTreeSet<String>,
}

impl PageRuntime {
    pub fn new(
        config: PageConfig,
        layout: PageLayout,
        transport: Arc<dyn SubmissionTransport>,
    ) -> Self {
        let dom = DomHandle::new();
        let (tx, rx) = mpsc::unbounded_channel();

        dom.update(|d| {
            for id in layout.lazy_images.keys() {
                d.images.insert(id.clone(), ImageView { src: None, lazy: true });
            }
        });

        let contact = ContactForm::new(dom.clone(), &config.forms);
        let newsletter = NewsletterForm::new(dom.clone(), &config.forms);
        let fade_pending = layout.fade_elements.iter().cloned().collect();

        info!(
            "Page runtime ready: {} section(s), {} nav link(s), transport {}",
            layout.sections.len(),
            layout.nav_links.len(),
            transport.name()
        );

        Self {
            config,
            layout,
            dom,
            contact,
            newsletter,
            transport,
            tx,
            rx,
            pending: 0,
            resize_generation: 0,
            resizes_settled: 0,
            fade_pending,
        }
    }

    /// Sender for feeding events from outside the loop
    pub fn sender(&self) -> UnboundedSender<PageEvent> {
        self.tx.clone()
    }

    /// Queue a user event
    pub fn dispatch(&self, event: UserEvent) {
        // The receiver lives as long as `self`
        let _ = self.tx.send(PageEvent::User(event));
    }

    pub fn dom(&self) -> &DomHandle {
        &self.dom
    }

    pub fn snapshot(&self) -> Dom {
        self.dom.snapshot()
    }

    pub fn contact(&self) -> &ContactForm<DomHandle> {
        &self.contact
    }

    pub fn newsletter(&self) -> &NewsletterForm<DomHandle> {
        &self.newsletter
    }

    /// Number of spawned tasks still outstanding
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Number of resize bursts acted on
    pub fn resizes_settled(&self) -> u64 {
        self.resizes_settled
    }

    /// Process one event, waiting for spawned work if the queue is empty
    ///
    /// Returns `false` once nothing is queued and nothing is outstanding.
    pub async fn step(&mut self) -> Result<bool> {
        let event = match self.rx.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) if self.pending > 0 => match self.rx.recv().await {
                Some(event) => event,
                None => return Ok(false),
            },
            Err(_) => return Ok(false),
        };

        self.handle(event)?;
        Ok(true)
    }

    /// Run until the queue is drained and every timer has fired
    pub async fn settle(&mut self) -> Result<()> {
        while self.step().await? {}
        Ok(())
    }

    /// Process events as they arrive for `duration`, then stop
    pub async fn run_for(&mut self, duration: Duration) -> Result<()> {
        let deadline = Instant::now() + duration;

        loop {
            let next = tokio::select! {
                event = self.rx.recv() => event,
                _ = tokio::time::sleep_until(deadline) => None,
            };

            match next {
                Some(event) => self.handle(event)?,
                None => return Ok(()),
            }
        }
    }

    /// React to a single event
    pub fn handle(&mut self, event: PageEvent) -> Result<()> {
        match event {
            PageEvent::User(event) => self.handle_user(event)?,
            PageEvent::Timer(effect) => {
                self.task_done();
                debug!("Timer fired: {:?}", effect);
                match effect {
                    DeferredEffect::HideSuccessNotice => self.contact.hide_success_notice(),
                    DeferredEffect::ClearSubscribed => self.newsletter.clear_subscribed(),
                }
            }
            PageEvent::ContactSettled(result) => {
                self.task_done();
                if let SubmitOutcome::Succeeded { follow_up } = self.contact.complete_submit(result)? {
                    self.schedule(follow_up);
                }
            }
            PageEvent::ResizeSettled { generation } => {
                self.task_done();
                if generation == self.resize_generation {
                    self.resizes_settled += 1;
                    debug!("Resize settled; layout-dependent features refreshed");
                } else {
                    trace!("Stale resize generation {} ignored", generation);
                }
            }
        }
        Ok(())
    }

    fn handle_user(&mut self, event: UserEvent) -> Result<()> {
        match event {
            UserEvent::Input { field, value } => {
                if self.contact.has_field(&field) {
                    self.mirror_input(&field, &value);
                    self.contact.input(&field, value)?;
                } else if field == FieldId::NEWSLETTER_EMAIL.as_str() {
                    self.mirror_input(&field, &value);
                    self.newsletter.input(value);
                } else {
                    warn!("Input for unknown field `{}` ignored", field);
                }
            }
            UserEvent::Blur { field } => {
                if self.contact.has_field(&field) {
                    self.contact.blur(&field)?;
                } else if field == FieldId::NEWSLETTER_EMAIL.as_str() {
                    trace!("Newsletter field does not validate on blur");
                } else {
                    warn!("Blur for unknown field `{}` ignored", field);
                }
            }
            UserEvent::Submit { form } => self.submit(form),
            UserEvent::Scroll { y } => self.on_scroll(y),
            UserEvent::LinkClick { href } => self.on_link_click(&href),
            UserEvent::ToggleMenu => self.dom.update(|d| d.menu_open = !d.menu_open),
            UserEvent::KeyDown { key } => {
                if key == "Escape" {
                    self.collapse_menu();
                }
            }
            UserEvent::Intersect { element } => self.on_intersect(&element),
            UserEvent::Resize { width, height } => {
                self.resize_generation += 1;
                trace!("Resize to {}x{}", width, height);
                let generation = self.resize_generation;
                let delay = self.config.resize_debounce();
                self.spawn_after(delay, PageEvent::ResizeSettled { generation });
            }
            UserEvent::VisibilityChange { hidden } => {
                debug!("Page {}", if hidden { "hidden" } else { "visible" });
            }
        }
        Ok(())
    }

    fn submit(&mut self, form: FormId) {
        match form {
            FormId::Contact => {
                if let SubmitRequest::Dispatch(submission) = self.contact.request_submit() {
                    let transport = Arc::clone(&self.transport);
                    let tx = self.tx.clone();
                    self.pending += 1;
                    tokio::spawn(async move {
                        // A panicking transport still has to settle the form
                        let call = tokio::spawn(async move { transport.submit(&submission).await });
                        let result = match call.await {
                            Ok(result) => result,
                            Err(err) => {
                                error!("Contact transport task failed: {}", err);
                                Err(TransportError::new(format!("transport task failed: {err}")))
                            }
                        };
                        let _ = tx.send(PageEvent::ContactSettled(result));
                    });
                }
            }
            FormId::Newsletter => {
                if let NewsletterOutcome::Subscribed { follow_up } = self.newsletter.submit() {
                    self.schedule(follow_up);
                }
            }
        }
    }

    fn on_scroll(&mut self, y: f64) {
        let nav_config = &self.config.nav;
        let scrolled = nav::navbar_scrolled(y, nav_config.scroll_threshold);
        let current = nav::active_section(y, &self.layout.sections, nav_config.section_offset);
        let active = self
            .layout
            .nav_links
            .iter()
            .find(|href| nav::nav_link_active(href, current))
            .cloned();

        self.dom.update(|d| {
            d.scroll_y = y;
            d.navbar_scrolled = scrolled;
            d.active_link = active;
        });
    }

    fn on_link_click(&mut self, href: &str) {
        if self.layout.nav_links.iter().any(|link| link == href) {
            self.collapse_menu();
        }

        let Some(target) = href
            .strip_prefix('#')
            .and_then(|id| self.layout.section(id))
        else {
            debug!("No section for link `{}`", href);
            return;
        };

        let y = nav::smooth_scroll_target(target.top, self.config.nav.scroll_offset);
        debug!("Smooth scroll to `{}` at {}", target.id, y);
        self.on_scroll(y);
    }

    fn on_intersect(&mut self, element: &str) {
        if let Some(src) = self.layout.lazy_images.get(element) {
            let src = src.clone();
            self.dom.update(|d| {
                let image = d.images.entry(element.to_string()).or_default();
                if image.lazy {
                    image.src = Some(src);
                    image.lazy = false;
                }
            });
        } else if self.fade_pending.remove(element) {
            self.dom.update(|d| {
                d.visible.insert(element.to_string());
            });
        }
    }

    /// The browser updates the element before any handler runs
    fn mirror_input(&self, field: &str, value: &str) {
        self.dom.update(|d| {
            d.fields.entry(field.to_string()).or_default().value = value.to_string();
        });
    }

    fn collapse_menu(&mut self) {
        self.dom.update(|d| d.menu_open = false);
    }

    fn schedule(&mut self, deferred: Deferred) {
        self.spawn_after(deferred.delay, PageEvent::Timer(deferred.effect));
    }

    fn spawn_after(&mut self, delay: Duration, event: PageEvent) {
        let tx = self.tx.clone();
        self.pending += 1;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
    }

    fn task_done(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}
