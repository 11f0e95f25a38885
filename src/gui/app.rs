// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::{consts::DEFAULT_CONFIG_FILE, file, state::AppState},
    data::WikiData,
    fetch::{Generation, Token},
    session::Tracker,
};

use super::{pages::Page, progress::GuiProgress, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState {
        options: file::load(Path::new(DEFAULT_CONFIG_FILE)),
        ..AppState::default()
    };
    eframe::run_native(
        "DQ Wiki",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

type Inbox = Arc<Mutex<Option<(Token, WikiData)>>>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last committed load; empty until the first load lands
    pub data: WikiData,
    pub tracker: Tracker,

    // one-line feedback under the HP tool (bad input, no selection)
    pub message: Option<String>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    generation: Generation,
    inbox: Inbox,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            data: WikiData::default(),
            tracker: Tracker::new(),
            message: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            generation: Generation::new(),
            inbox: Arc::new(Mutex::new(None)),
        };
        logf!("Init: data_dir={}", app.state.options.sources.data_dir.display());
        app.reload();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_page_index = idx.min(router::all_pages().len().saturating_sub(1));
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /* ---------- loading ---------- */

    /// Start a background load. A load still in flight becomes stale.
    pub fn reload(&mut self) {
        let token = self.generation.begin();
        let generation = self.generation.clone();
        let inbox = Arc::clone(&self.inbox);
        let status = Arc::clone(&self.status);
        let opts = self.state.options.clone();
        self.running = true;
        logf!("Load: begin {token:?}");

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let data = WikiData::load(&opts, Some(&mut prog));
            if generation.is_current(token) {
                *inbox.lock().unwrap_or_else(|e| e.into_inner()) = Some((token, data));
            } else {
                logd!("Load: dropping stale result {token:?}");
            }
        });
    }

    /// Commit a finished load, if any. Called once per frame.
    fn poll_load(&mut self) {
        let landed = self.inbox.lock().unwrap_or_else(|e| e.into_inner()).take();
        let Some((token, data)) = landed else { return };
        if !self.generation.is_current(token) {
            logd!("Load: dropping stale result {token:?}");
            return;
        }

        // Keep the running session only if its boss still exists with the same HP.
        let keep = match (self.tracker.selected(), self.tracker.session()) {
            (Some(key), Some(s)) => data
                .index
                .get(key)
                .is_some_and(|enc| enc.max_hp() == Some(s.max_hp())),
            _ => false,
        };
        if !keep && self.tracker.is_active() {
            logf!("Load: selected boss changed, clearing session");
            self.tracker.deselect();
        }

        self.data = data;
        self.running = false;
        if let Some(f) = self.data.failures.first() {
            logw!("Load: {} failed source(s), first: {f}", self.data.failures.len());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running {
                    ui.spinner();
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);
            ui.separator();
            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
