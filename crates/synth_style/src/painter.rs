//! Painter handles and painter lookup
//!
//! The engine never paints. Styles carry painter handles keyed by paint method
//! (`"buttonbackground"`, `"scrollbarthumbborder"`, ...) and optionally by
//! orientation; delegates ask the resolved context for the best painter and
//! invoke it themselves.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use synth_core::Rect;

use crate::context::SynthContext;

/// Layout direction a painter is specialized for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Name of a paint operation, stored lower-case
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintMethod(Cow<'static, str>);

impl PaintMethod {
    pub const BACKGROUND: PaintMethod = PaintMethod(Cow::Borrowed("background"));
    pub const BORDER: PaintMethod = PaintMethod(Cow::Borrowed("border"));
    pub const FOREGROUND: PaintMethod = PaintMethod(Cow::Borrowed("foreground"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        if name.chars().any(char::is_uppercase) {
            PaintMethod(Cow::Owned(name.to_lowercase()))
        } else {
            PaintMethod(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaintMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a painter gets for one paint call
pub struct PaintRequest<'a> {
    pub context: &'a SynthContext<'a>,
    pub method: &'a PaintMethod,
    pub bounds: Rect,
    pub orientation: Option<Orientation>,
}

impl<'a> PaintRequest<'a> {
    pub fn new(context: &'a SynthContext<'a>, method: &'a PaintMethod, bounds: Rect) -> Self {
        Self {
            context,
            method,
            bounds,
            orientation: None,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Rendering callback supplied by a skin
pub trait SynthPainter: Send + Sync + fmt::Debug {
    fn paint(&self, request: &PaintRequest<'_>);
}

/// Shared painter, compared by identity
#[derive(Clone)]
pub struct PainterHandle(Arc<dyn SynthPainter>);

impl PainterHandle {
    pub fn new(painter: impl SynthPainter + 'static) -> Self {
        PainterHandle(Arc::new(painter))
    }

    pub fn from_arc(painter: Arc<dyn SynthPainter>) -> Self {
        PainterHandle(painter)
    }

    /// One handle that paints with each of `painters` in order
    pub fn aggregate(painters: impl IntoIterator<Item = PainterHandle>) -> Self {
        PainterHandle::new(AggregatePainter {
            painters: painters.into_iter().collect(),
        })
    }

    pub fn paint(&self, request: &PaintRequest<'_>) {
        self.0.paint(request);
    }

    pub fn ptr_eq(&self, other: &PainterHandle) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }
}

impl PartialEq for PainterHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for PainterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Forwards each paint call to several painters
#[derive(Debug)]
pub struct AggregatePainter {
    painters: Vec<PainterHandle>,
}

impl SynthPainter for AggregatePainter {
    fn paint(&self, request: &PaintRequest<'_>) {
        for painter in &self.painters {
            painter.paint(request);
        }
    }
}

/// A painter bound to a paint method and orientation
///
/// `method == None` paints any method; `orientation == None` paints any
/// orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct PainterInfo {
    pub method: Option<PaintMethod>,
    pub orientation: Option<Orientation>,
    pub painter: PainterHandle,
}

impl PainterInfo {
    pub fn new(method: Option<PaintMethod>, painter: PainterHandle) -> Self {
        Self {
            method,
            orientation: None,
            painter,
        }
    }

    /// Painter for every method without a more specific entry
    pub fn any(painter: PainterHandle) -> Self {
        Self::new(None, painter)
    }

    pub fn for_method(method: PaintMethod, painter: PainterHandle) -> Self {
        Self::new(Some(method), painter)
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Stack another painter on this slot; both paint, in order
    pub fn add_painter(&mut self, painter: PainterHandle) {
        self.painter = PainterHandle::aggregate([self.painter.clone(), painter]);
    }

    /// Same method and orientation
    pub fn same_slot(&self, other: &PainterInfo) -> bool {
        self.method == other.method && self.orientation == other.orientation
    }
}

/// Overlay `over` onto `base`: entries for the same slot are replaced in
/// place, new slots are appended in order
pub(crate) fn merge_painters(base: &[PainterInfo], over: &[PainterInfo]) -> Vec<PainterInfo> {
    let mut merged = base.to_vec();
    for info in over {
        match merged.iter_mut().find(|existing| existing.same_slot(info)) {
            Some(existing) => *existing = info.clone(),
            None => merged.push(info.clone()),
        }
    }
    merged
}

/// Best painter for `method`, scanning latest entries first
///
/// Exact method and orientation wins, then the method with no orientation,
/// then a painter registered for no particular method.
pub(crate) fn best_painter<'a>(
    infos: &'a [PainterInfo],
    method: &PaintMethod,
    orientation: Option<Orientation>,
) -> Option<&'a PainterHandle> {
    let mut method_painter = None;
    let mut any_painter = None;

    for info in infos.iter().rev() {
        match &info.method {
            Some(m) if m == method => {
                if info.orientation == orientation {
                    return Some(&info.painter);
                }
                if method_painter.is_none() && info.orientation.is_none() {
                    method_painter = Some(&info.painter);
                }
            }
            Some(_) => {}
            None => {
                if any_painter.is_none() {
                    any_painter = Some(&info.painter);
                }
            }
        }
    }

    method_painter.or(any_painter)
}
