use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use synth_core::{ButtonModel, Color, ComponentState, Font, Rect, StyledWidget, WidgetId};
use synth_style::{
    ColorType, MatchKind, Orientation, PaintMethod, PaintRequest, PainterHandle, PainterInfo, Region,
    StateInfo, StyleEngine, SynthPainter, SynthSession, SynthStyle, WellKnownKey,
};

struct Button {
    id: u64,
    name: Option<&'static str>,
    enabled: bool,
    focused: bool,
    foreground: Option<Color>,
}

impl Button {
    fn new(name: &'static str) -> Self {
        Self {
            id: 1,
            name: Some(name),
            enabled: true,
            focused: false,
            foreground: None,
        }
    }
}

impl StyledWidget for Button {
    fn id(&self) -> WidgetId {
        WidgetId(self.id)
    }

    fn name(&self) -> Option<&str> {
        self.name
    }

    fn ui_key(&self) -> &str {
        "ButtonUI"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_focus_owner(&self) -> bool {
        self.focused
    }

    fn foreground(&self) -> Option<Color> {
        self.foreground
    }
}

/// Records every paint call as `"<label>:<method>"`
#[derive(Debug)]
struct Recorder {
    label: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl SynthPainter for Recorder {
    fn paint(&self, request: &PaintRequest<'_>) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.label, request.method));
    }
}

fn recorder(label: &'static str, log: &Arc<Mutex<Vec<String>>>) -> PainterHandle {
    PainterHandle::new(Recorder {
        label,
        log: log.clone(),
    })
}

fn button_style() -> Arc<SynthStyle> {
    Arc::new(
        SynthStyle::new()
            .font(Font::plain("Dialog", 12.0))
            .property(WellKnownKey::ButtonTextShiftOffset, 1i64)
            .state(
                StateInfo::new(ComponentState::empty())
                    .color(ColorType::Background, Color::WHITE)
                    .color(ColorType::Foreground, Color::BLACK),
            )
            .state(
                StateInfo::new(ComponentState::ENABLED | ComponentState::FOCUSED)
                    .color(ColorType::Focus, Color::BLUE)
                    .font(Font::plain("Dialog", 13.0)),
            )
            .state(
                StateInfo::new(ComponentState::PRESSED)
                    .color(ColorType::Background, Color::GRAY)
                    .property(WellKnownKey::ButtonTextShiftOffset, 2i64),
            )
            .state(StateInfo::new(ComponentState::SELECTED).color(ColorType::Foreground, Color::RED)),
    )
}

fn engine() -> StyleEngine {
    let engine = StyleEngine::new(SynthSession::new());
    engine.register(Some("button"), button_style(), MatchKind::Region).unwrap();
    engine
}

#[test]
fn derived_state_follows_widget() {
    let engine = engine();
    let mut button = Button::new("ok");
    assert_eq!(engine.context(&button, &Region::BUTTON).state(), ComponentState::ENABLED);

    button.focused = true;
    let ctx = engine.context(&button, &Region::BUTTON);
    assert_eq!(ctx.state(), ComponentState::ENABLED | ComponentState::FOCUSED);
    assert_eq!(ctx.color(ColorType::Focus), Some(Color::BLUE));
    assert_eq!(ctx.font().size(), 13.0);

    button.enabled = false;
    assert_eq!(engine.context(&button, &Region::BUTTON).state(), ComponentState::DISABLED);
}

#[test]
fn color_precedence() {
    let engine = engine();
    let mut button = Button::new("ok");

    let ctx = engine.context(&button, &Region::BUTTON);
    // ENABLED has no entry of its own; the wildcard state supplies colors
    assert_eq!(ctx.color(ColorType::Background), Some(Color::WHITE));
    assert_eq!(ctx.color(ColorType::Foreground), Some(Color::BLACK));

    button.foreground = Some(Color::GREEN);
    let ctx = engine.context(&button, &Region::BUTTON);
    assert_eq!(ctx.color(ColorType::Foreground), Some(Color::GREEN));
    assert_eq!(ctx.color(ColorType::TextForeground), Some(Color::GREEN));

    let pressed = engine.context_with_state(&button, &Region::BUTTON, ComponentState::PRESSED);
    assert_eq!(pressed.color(ColorType::Background), Some(Color::GRAY));
    assert_eq!(pressed.color(ColorType::Foreground), Some(Color::GREEN));

    button.enabled = false;
    let disabled = engine.context(&button, &Region::BUTTON);
    assert_eq!(disabled.color(ColorType::Foreground), Some(Color::BLACK));
}

#[test]
fn properties_per_state() {
    let engine = engine();
    let button = Button::new("ok");

    let ctx = engine.context(&button, &Region::BUTTON);
    assert_eq!(ctx.get_int(WellKnownKey::ButtonTextShiftOffset, 0), 1);
    assert_eq!(ctx.get_int("Button.textShiftOffset", 0), 1);
    assert_eq!(ctx.get_int("Button.unknown", 7), 7);

    let model = ButtonModel {
        pressed: true,
        armed: true,
        ..ButtonModel::default()
    };
    let pressed = ctx.with_state(ComponentState::for_button(&model));
    assert_eq!(pressed.state(), ComponentState::PRESSED);
    assert_eq!(pressed.get_int(WellKnownKey::ButtonTextShiftOffset, 0), 2);
}

#[test]
fn painter_lookup_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let thumb = PaintMethod::new("ScrollBarThumbBackground");

    let style = SynthStyle::new()
        .painter(PainterInfo::any(recorder("any", &log)))
        .painter(PainterInfo::for_method(thumb.clone(), recorder("thumb", &log)))
        .painter(
            PainterInfo::for_method(thumb.clone(), recorder("thumb-v", &log)).orientation(Orientation::Vertical),
        )
        .state(
            StateInfo::new(ComponentState::PRESSED)
                .painter(PainterInfo::for_method(thumb.clone(), recorder("thumb-pressed", &log))),
        );

    let engine = StyleEngine::new(SynthSession::new());
    engine.register(Some("scrollbarthumb"), Arc::new(style), MatchKind::Region).unwrap();

    let widget = Button::new("bar");
    let bounds = Rect::new(0.0, 0.0, 8.0, 40.0);
    let ctx = engine.context(&widget, &Region::SCROLL_BAR_THUMB);
    assert!(ctx.is_subregion());

    assert!(ctx.paint(&thumb, bounds, Some(Orientation::Vertical)));
    assert!(ctx.paint(&thumb, bounds, Some(Orientation::Horizontal)));
    assert!(ctx.paint(&PaintMethod::BORDER, bounds, None));
    assert!(ctx.with_state(ComponentState::PRESSED).paint(&thumb, bounds, None));

    let unstyled = engine.context(&widget, &Region::BUTTON);
    assert!(!unstyled.paint(&thumb, bounds, None));

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "thumb-v:scrollbarthumbbackground",
            "thumb:scrollbarthumbbackground",
            "any:border",
            "thumb-pressed:scrollbarthumbbackground",
        ]
    );
}

#[test]
fn aggregated_painters_run_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut info = PainterInfo::for_method(PaintMethod::BACKGROUND, recorder("first", &log));
    info.add_painter(recorder("second", &log));

    let engine = StyleEngine::new(SynthSession::new());
    engine
        .register(None, Arc::new(SynthStyle::new().painter(info)), MatchKind::Region)
        .unwrap();

    let widget = Button::new("ok");
    let ctx = engine.context(&widget, &Region::PANEL);
    assert!(ctx.paint(&PaintMethod::BACKGROUND, Rect::new(0.0, 0.0, 1.0, 1.0), None));
    assert_eq!(*log.lock().unwrap(), vec!["first:background", "second:background"]);
}

#[test]
fn selected_ui_overrides_derived_state() {
    let engine = engine();
    let button = Button::new("cell");
    let selected = ComponentState::for_selected_ui(true, false, true, false);

    {
        let _scope = engine.session().select_ui(button.id(), selected);
        let ctx = engine.context(&button, &Region::BUTTON);
        assert_eq!(ctx.state(), ComponentState::ENABLED | ComponentState::SELECTED);
        assert_eq!(ctx.color(ColorType::Foreground), Some(Color::RED));
    }

    {
        let focused = ComponentState::for_selected_ui(true, true, true, false);
        let _scope = engine.session().select_ui(button.id(), focused);
        let ctx = engine.context(&button, &Region::BUTTON);
        assert_eq!(
            ctx.state(),
            ComponentState::ENABLED | ComponentState::SELECTED | ComponentState::FOCUSED
        );
        assert_eq!(ctx.color(ColorType::Focus), Some(Color::BLUE));
    }

    assert_eq!(engine.context(&button, &Region::BUTTON).state(), ComponentState::ENABLED);
}

#[test]
fn selected_ui_restored_after_panic() {
    let engine = engine();
    let button = Button::new("cell");

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _scope = engine.session().select_ui(button.id(), ComponentState::SELECTED);
        assert_eq!(
            engine.component_state(&button),
            ComponentState::ENABLED | ComponentState::SELECTED
        );
        panic!("renderer failed");
    }));

    assert!(result.is_err());
    assert_eq!(engine.session().selected_state(button.id()), None);
    assert_eq!(engine.component_state(&button), ComponentState::ENABLED);
}
