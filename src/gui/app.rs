//! The orb application: a borderless always-on-top window that expands
//! from a small circle into the action panel.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use chrono::Local;
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{info, warn};

use crate::actions::ActionKind;
use crate::clipboard::ClipboardHistory;
use crate::events::AppEvent;
use crate::invoker::SystemInvoker;
use crate::latency::LatencyReading;
use crate::settings::Settings;
use crate::snapping::{self, Rect};
use crate::store::ActionStore;

use super::components::converter_view::{self, ConverterState};
use super::components::date_view::{self, DateState};
use super::components::decision_view::{self, DecisionState};
use super::components::editor::{self, EditorOp};
use super::components::grid::{self, GridClick};
use super::components::note_view::{self, NoteState};
use super::components::qr_view::{self, QrState};
use super::components::reference_view::{self, ReferenceState};
use super::components::ruler_view::{self, RulerState};
use super::components::stats_view::{self, StatsState};
use super::components::timer_view::{self, TimerState};
use super::components::volume_view::{self, VolumeOp};
use super::components::{clipboard_view, latency_view, settings_view};
use super::constants::*;

struct Toast {
    text: String,
    color: egui::Color32,
    expires: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelView {
    Grid,
    Editor,
    Tool(ActionKind),
}

pub struct OrbApp {
    store: ActionStore,
    settings: Settings,
    settings_path: PathBuf,
    invoker: SystemInvoker,
    events: Receiver<AppEvent>,

    expanded: bool,
    view: PanelView,
    toast: Option<Toast>,

    clipboard_history: ClipboardHistory,
    latency: Option<LatencyReading>,

    qr: QrState,
    timer: TimerState,
    note: NoteState,
    ruler: RulerState,
    decision: DecisionState,
    date_tool: DateState,
    stats: StatsState,
    converter: ConverterState,
    references: ReferenceState,
}

impl OrbApp {
    fn new(
        _cc: &CreationContext<'_>,
        store: ActionStore,
        settings: Settings,
        settings_path: PathBuf,
        invoker: SystemInvoker,
        events: Receiver<AppEvent>,
    ) -> Self {
        info!("initializing orb window");
        Self {
            store,
            settings,
            settings_path,
            invoker,
            events,
            expanded: false,
            view: PanelView::Grid,
            toast: None,
            clipboard_history: ClipboardHistory::default(),
            latency: None,
            qr: QrState::default(),
            timer: TimerState::default(),
            note: NoteState::load(NoteState::default_path()),
            ruler: RulerState::default(),
            decision: DecisionState::default(),
            date_tool: DateState::new(Local::now().date_naive()),
            stats: StatsState::default(),
            converter: ConverterState::default(),
            references: ReferenceState::default(),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                AppEvent::Invocation {
                    title,
                    success,
                    detail,
                } => {
                    let color = if success { STATUS_OK } else { STATUS_ERROR };
                    let text = detail.unwrap_or_else(|| {
                        format!("{title} {}", if success { "done" } else { "failed" })
                    });
                    self.show_toast(text, color);
                }
                AppEvent::ClipboardCaptured(text) => self.clipboard_history.push(&text),
                AppEvent::LatencyProbe(reading) => self.latency = Some(reading),
            }
        }
    }

    fn show_toast(&mut self, text: String, color: egui::Color32) {
        self.toast = Some(Toast {
            text,
            color,
            expires: Instant::now() + Duration::from_secs(TOAST_SECS),
        });
    }

    fn set_expanded(&mut self, ctx: &egui::Context, expanded: bool) {
        self.expanded = expanded;
        self.view = PanelView::Grid;
        let size = if expanded {
            egui::vec2(PANEL_WIDTH, PANEL_HEIGHT)
        } else {
            egui::vec2(ORB_SIZE, ORB_SIZE)
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
    }

    /// Snap to nearby monitor edges and remember where the window landed.
    fn finish_drag(&mut self, ctx: &egui::Context) {
        let (outer, monitor) = ctx.input(|i| (i.viewport().outer_rect, i.viewport().monitor_size));
        let Some(outer) = outer else { return };

        let window = Rect {
            x: outer.min.x,
            y: outer.min.y,
            width: outer.width(),
            height: outer.height(),
        };

        let mut position = (window.x, window.y);
        if let Some(monitor) = monitor {
            let monitor = Rect {
                x: 0.0,
                y: 0.0,
                width: monitor.x,
                height: monitor.y,
            };
            if let Some(snapped) =
                snapping::find_snap_position(window, monitor, self.settings.snap_threshold)
            {
                position = snapped;
            }
            let moved = Rect {
                x: position.0,
                y: position.1,
                ..window
            };
            position = snapping::clamp_to_monitor(moved, monitor);
        }

        if position != (window.x, window.y) {
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                position.0, position.1,
            )));
        }

        self.settings.window_x = Some(position.0);
        self.settings.window_y = Some(position.1);
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(err) = self.settings.save(&self.settings_path) {
            warn!("failed to save settings: {err:#}");
        }
    }

    fn orb_ui(&mut self, ui: &mut egui::Ui) {
        let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
        let center = response.rect.center();

        let painter = ui.painter();
        painter.circle_filled(
            center,
            ORB_RADIUS,
            egui::Color32::from_rgba_unmultiplied(24, 24, 28, 235),
        );
        painter.circle_stroke(
            center,
            ORB_RADIUS,
            egui::Stroke::new(1.0, egui::Color32::from_white_alpha(46)),
        );

        // Hex ring of dots echoing the action grid
        let dot = egui::Color32::from_white_alpha(180);
        for (dx, dy) in [
            (0.0, -14.0),
            (12.0, -7.0),
            (12.0, 7.0),
            (0.0, 14.0),
            (-12.0, 7.0),
            (-12.0, -7.0),
        ] {
            painter.circle_filled(center + egui::vec2(dx, dy), 3.0, dot);
        }
        painter.circle_filled(center, 3.0, dot);

        if response.double_clicked() {
            self.set_expanded(ui.ctx(), true);
        }
        if response.drag_started() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }
        if response.drag_stopped() {
            self.finish_drag(ui.ctx());
        }
    }

    fn panel_ui(&mut self, ui: &mut egui::Ui, dropped: &[PathBuf]) {
        let rect = ui.max_rect();
        ui.painter().rect_filled(
            rect,
            egui::CornerRadius::same(PANEL_CORNER_RADIUS),
            egui::Color32::from_rgba_unmultiplied(24, 24, 28, 235),
        );
        ui.painter().rect_stroke(
            rect,
            egui::CornerRadius::same(PANEL_CORNER_RADIUS),
            egui::Stroke::new(1.0, egui::Color32::from_white_alpha(46)),
            egui::StrokeKind::Inside,
        );

        // Empty panel space moves the window; double-click collapses
        let background = ui.interact(
            rect,
            ui.id().with("panel_drag"),
            egui::Sense::click_and_drag(),
        );
        if background.double_clicked() {
            self.set_expanded(ui.ctx(), false);
        }
        if background.drag_started() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }
        if background.drag_stopped() {
            self.finish_drag(ui.ctx());
        }

        egui::Frame::NONE
            .inner_margin(egui::Margin::same(PANEL_MARGIN))
            .show(ui, |ui| {
                self.header_ui(ui);
                ui.add_space(SECTION_SPACING);

                match self.view {
                    PanelView::Grid => self.grid_ui(ui),
                    PanelView::Editor => self.editor_ui(ui),
                    PanelView::Tool(kind) => self.tool_ui(ui, kind, dropped),
                }

                if let Some(toast) = &self.toast {
                    ui.add_space(ITEM_SPACING);
                    ui.colored_label(toast.color, &toast.text);
                }
            });
    }

    fn header_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Quickorb").size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙").on_hover_text("Edit actions").clicked() {
                    self.view = if self.view == PanelView::Editor {
                        PanelView::Grid
                    } else {
                        PanelView::Editor
                    };
                }
            });
        });
    }

    fn grid_ui(&mut self, ui: &mut egui::Ui) {
        let enabled = self.store.enabled_actions();
        match grid::ui(ui, &enabled) {
            GridClick::Action(idx) => {
                if let Some(action) = enabled.get(idx) {
                    self.route(action.kind, &action.title);
                }
            }
            GridClick::Close => self.set_expanded(ui.ctx(), false),
            GridClick::None => {}
        }
    }

    /// OS kinds fire through the invoker; tool kinds switch the panel to
    /// their view.
    fn route(&mut self, kind: ActionKind, title: &str) {
        match kind {
            ActionKind::DesktopIcons
            | ActionKind::Appearance
            | ActionKind::Command
            | ActionKind::Finder => self.invoker.invoke(kind, title),
            ActionKind::GoHome => {}
            ActionKind::TextStats => {
                self.stats.refresh();
                self.view = PanelView::Tool(kind);
            }
            _ => self.view = PanelView::Tool(kind),
        }
    }

    fn editor_ui(&mut self, ui: &mut egui::Ui) {
        let op = editor::ui(ui, self.store.actions());
        match op {
            EditorOp::Toggle(id) => self.store.toggle(&id),
            EditorOp::MoveUp(idx) => {
                if idx > 0 {
                    self.store.move_action(idx, idx - 1);
                }
            }
            EditorOp::MoveDown(idx) => self.store.move_action(idx, idx + 1),
            EditorOp::None => {}
        }

        ui.add_space(SECTION_SPACING);
        if settings_view::ui(ui, &mut self.settings) {
            self.settings.validate_and_clamp();
            self.save_settings();
        }

        ui.add_space(SECTION_SPACING);
        if ui.button("Done").clicked() {
            self.view = PanelView::Grid;
        }
    }

    fn tool_ui(&mut self, ui: &mut egui::Ui, kind: ActionKind, dropped: &[PathBuf]) {
        if ui.button("⬅ Back").clicked() {
            self.view = PanelView::Grid;
        }
        ui.add_space(ITEM_SPACING);

        match kind {
            ActionKind::Clipboard => clipboard_view::ui(ui, &mut self.clipboard_history),
            ActionKind::QrCode => qr_view::ui(ui, &mut self.qr),
            ActionKind::Latency => latency_view::ui(
                ui,
                self.latency.as_ref(),
                self.settings.latency_probe_enabled,
            ),
            ActionKind::ReferenceImage => reference_view::ui(ui, &mut self.references, dropped),
            ActionKind::DateUtility => {
                date_view::ui(ui, &mut self.date_tool, Local::now().date_naive())
            }
            ActionKind::QuickTimer => timer_view::ui(ui, &mut self.timer),
            ActionKind::StickyNote => note_view::ui(ui, &mut self.note),
            ActionKind::ScreenRuler => ruler_view::ui(ui, &mut self.ruler),
            ActionKind::DecisionMaker => decision_view::ui(ui, &mut self.decision),
            ActionKind::ImageConverter => converter_view::ui(ui, &mut self.converter, dropped),
            ActionKind::TextStats => stats_view::ui(ui, &mut self.stats),
            ActionKind::VolumeControl => match volume_view::ui(ui, self.settings.volume_step) {
                VolumeOp::Down => self.invoker.adjust_volume(-self.settings.volume_step),
                VolumeOp::Up => self.invoker.adjust_volume(self.settings.volume_step),
                VolumeOp::Mute => self.invoker.toggle_mute(),
                VolumeOp::None => {}
            },
            // OS kinds never route here
            _ => self.view = PanelView::Grid,
        }
    }
}

impl eframe::App for OrbApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        if self.timer.poll_finished() {
            self.show_toast("Timer finished.".to_string(), STATUS_OK);
        }
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| Instant::now() >= toast.expires)
        {
            self.toast = None;
        }

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if self.expanded {
                    self.panel_ui(ui, &dropped);
                } else {
                    self.orb_ui(ui);
                }
            });

        reference_view::show_windows(ctx, &mut self.references);

        // Timers, toasts and probe results advance without input events
        ctx.request_repaint_after(Duration::from_millis(TICK_MS));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_settings();
        info!("orb exiting");
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // The window is shaped by what we paint; everything else stays clear
        egui::Rgba::TRANSPARENT.to_array()
    }
}

pub fn run_gui(
    store: ActionStore,
    settings: Settings,
    settings_path: PathBuf,
    invoker: SystemInvoker,
    events: Receiver<AppEvent>,
) -> Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([ORB_SIZE, ORB_SIZE])
        .with_min_inner_size([ORB_SIZE, ORB_SIZE])
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_resizable(false)
        .with_title("Quickorb");
    if let (Some(x), Some(y)) = (settings.window_x, settings.window_y) {
        viewport = viewport.with_position([x, y]);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Quickorb",
        options,
        Box::new(move |cc| {
            Ok(Box::new(OrbApp::new(
                cc,
                store,
                settings,
                settings_path,
                invoker,
                events,
            )))
        }),
    )
    .map_err(|err| anyhow!("failed to launch orb window: {err}"))
}
