//! Style resolution engine
//!
//! The engine keeps an ordered list of [`StyleRule`]s and answers "which style
//! applies to this widget in this region" by merging every matching rule's
//! payload, later registrations taking precedence over earlier ones.
//!
//! Resolution:
//!
//! 1. Rules are scanned from the most recently registered back to the first.
//!    Each rule tests the widget name (`""` when unset) or the lower-case
//!    region name, depending on its [`MatchKind`]. A payload matched by
//!    several rules is only collected once.
//! 2. No match yields the shared default style.
//! 3. The set of matched payloads keys the cache; the same set always maps
//!    to the same resolved `Arc`, whatever order the payloads were found in.
//! 4. On a miss, payloads are ordered by their latest registration position
//!    and composed from the least specific up. A single payload is cloned so
//!    callers can never reach the registered instance through the result.
//!
//! ```rust
//! use std::sync::Arc;
//! use synth_core::{Color, ComponentState, Font};
//! use synth_style::{ColorType, MatchKind, Region, StateInfo, StyleEngine, SynthSession, SynthStyle};
//!
//! let engine = StyleEngine::new(SynthSession::new());
//! engine
//!     .register(Some(".*"), Arc::new(SynthStyle::new().font(Font::plain("Serif", 12.0))), MatchKind::Region)
//!     .unwrap();
//! engine
//!     .register(
//!         Some("ok"),
//!         Arc::new(SynthStyle::new().state(
//!             StateInfo::new(ComponentState::ENABLED).color(ColorType::Foreground, Color::RED),
//!         )),
//!         MatchKind::Name,
//!     )
//!     .unwrap();
//!
//! let style = engine.resolve_named("ok", &Region::BUTTON);
//! assert_eq!(style.font.as_ref().map(Font::family), Some("Serif"));
//! assert_eq!(style.color_for_state(ComponentState::ENABLED, ColorType::Foreground), Some(Color::RED));
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use smallvec::SmallVec;
use synth_core::{ComponentState, Font, StyledWidget};

use crate::config::SynthConfig;
use crate::context::SynthContext;
use crate::error::Result;
use crate::region::Region;
use crate::rule::{MatchKind, StyleRule};
use crate::session::SynthSession;
use crate::style::SynthStyle;

/// Source of resolved styles for widget delegates
pub trait StyleFactory: Send + Sync {
    /// Style for `widget` painted as `region`; never absent
    fn style(&self, widget: &dyn StyledWidget, region: &Region) -> Arc<SynthStyle>;
}

/// Index of a distinct payload within a rule set
type StyleId = usize;

/// Order-insensitive set of matched payloads
#[derive(Clone, Debug)]
struct StyleKey {
    ids: SmallVec<[StyleId; 8]>,
    hash: u64,
}

impl StyleKey {
    fn new(matched: &[StyleId]) -> Self {
        let mut ids: SmallVec<[StyleId; 8]> = SmallVec::from_slice(matched);
        ids.sort_unstable();

        let mut hasher = FxHasher::default();
        ids.hash(&mut hasher);

        Self {
            ids,
            hash: hasher.finish(),
        }
    }
}

impl PartialEq for StyleKey {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.ids == other.ids
    }
}

impl Eq for StyleKey {}

impl Hash for StyleKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// Registered rules plus the payload bookkeeping resolution needs
#[derive(Default)]
struct RuleSet {
    rules: Vec<StyleRule>,
    /// Payload of each rule, parallel to `rules`
    rule_styles: Vec<StyleId>,
    styles: Vec<Arc<SynthStyle>>,
    by_ptr: FxHashMap<usize, StyleId>,
    /// Latest rule position of each payload
    ranks: Vec<usize>,
}

impl RuleSet {
    fn push(&mut self, rule: StyleRule) {
        let position = self.rules.len();
        let ptr = Arc::as_ptr(rule.style()) as usize;

        let id = match self.by_ptr.get(&ptr) {
            Some(&id) => {
                self.ranks[id] = position;
                id
            }
            None => {
                let id = self.styles.len();
                self.styles.push(rule.style().clone());
                self.ranks.push(position);
                self.by_ptr.insert(ptr, id);
                id
            }
        };

        self.rule_styles.push(id);
        self.rules.push(rule);
    }
}

/// Rule-based style resolver with a resolved-style cache
pub struct StyleEngine {
    session: Arc<SynthSession>,
    config: SynthConfig,
    default_font: Font,
    rules: RwLock<RuleSet>,
    cache: RwLock<FxHashMap<StyleKey, Arc<SynthStyle>>>,
    default_style: OnceLock<Arc<SynthStyle>>,
}

impl StyleEngine {
    pub fn new(session: Arc<SynthSession>) -> Self {
        Self::with_config(session, SynthConfig::default())
    }

    pub fn with_config(session: Arc<SynthSession>, config: SynthConfig) -> Self {
        let cache = FxHashMap::with_capacity_and_hasher(config.cache_capacity, Default::default());
        Self {
            session,
            default_font: config.default_font.to_font(),
            config,
            rules: RwLock::new(RuleSet::default()),
            cache: RwLock::new(cache),
            default_style: OnceLock::new(),
        }
    }

    /// Engine configured from TOML text, see [`SynthConfig`]
    pub fn from_toml_str(session: Arc<SynthSession>, text: &str) -> Result<Self> {
        let config = SynthConfig::from_toml_str(text)?;
        Ok(Self::with_config(session, config))
    }

    pub fn session(&self) -> &Arc<SynthSession> {
        &self.session
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a rule; it takes precedence over every earlier rule
    ///
    /// `None` matches everything. A malformed pattern registers nothing.
    pub fn register(&self, pattern: Option<&str>, style: Arc<SynthStyle>, kind: MatchKind) -> Result<()> {
        let rule = StyleRule::new(pattern, style, kind)?;
        self.add_rule(rule);
        Ok(())
    }

    /// Register an already compiled rule
    pub fn add_rule(&self, rule: StyleRule) {
        let mut rules = self.rules.write();
        tracing::debug!(pattern = rule.pattern(), kind = ?rule.kind(), "registered style rule");
        rules.push(rule);
        self.cache.write().clear();
    }

    /// Register several rules; if any pattern is malformed none are added
    pub fn register_all<'p, I>(&self, rules: I) -> Result<usize>
    where
        I: IntoIterator<Item = (Option<&'p str>, Arc<SynthStyle>, MatchKind)>,
    {
        let compiled = compile(rules)?;
        let count = compiled.len();

        let mut set = self.rules.write();
        for rule in compiled {
            set.push(rule);
        }
        self.cache.write().clear();
        tracing::debug!(count, total = set.rules.len(), "registered style rules");
        Ok(count)
    }

    /// Replace every rule at once; on error the current rules stay in place
    pub fn reload<'p, I>(&self, rules: I) -> Result<()>
    where
        I: IntoIterator<Item = (Option<&'p str>, Arc<SynthStyle>, MatchKind)>,
    {
        let compiled = compile(rules)?;

        let mut next = RuleSet::default();
        for rule in compiled {
            next.push(rule);
        }

        let mut set = self.rules.write();
        *set = next;
        self.cache.write().clear();
        tracing::debug!(total = set.rules.len(), "reloaded style rules");
        Ok(())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.read().rules.len()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolved style for `widget` painted as `region`
    pub fn resolve(&self, widget: &dyn StyledWidget, region: &Region) -> Arc<SynthStyle> {
        self.resolve_named(widget.name().unwrap_or(""), region)
    }

    /// Resolved style for a widget name and region
    pub fn resolve_named(&self, name: &str, region: &Region) -> Arc<SynthStyle> {
        let region_key = self.session.regions().lower_case_name(region);
        let set = self.rules.read();

        let mut seen: FxHashSet<StyleId> = FxHashSet::default();
        let mut matched: SmallVec<[StyleId; 8]> = SmallVec::new();
        for (rule, &id) in set.rules.iter().zip(&set.rule_styles).rev() {
            if rule.matches(name, &region_key) && seen.insert(id) {
                matched.push(id);
            }
        }

        if matched.is_empty() {
            tracing::trace!(name, region = %region, "no style rule matched, using default");
            return self.default_style();
        }

        let key = StyleKey::new(&matched);
        if let Some(hit) = self.cache.read().get(&key) {
            tracing::trace!(name, region = %region, "style cache hit");
            return hit.clone();
        }
        tracing::trace!(name, region = %region, matched = matched.len(), "style cache miss");

        // Most specific first
        matched.sort_unstable_by_key(|&id| Reverse(set.ranks[id]));

        let merged = match matched.split_last() {
            Some((&least, more)) => {
                let base = (*set.styles[least]).clone();
                more.iter()
                    .rev()
                    .fold(base, |style, &id| style.compose(&set.styles[id]))
            }
            None => SynthStyle::default(),
        };

        self.cache
            .write()
            .entry(key)
            .or_insert_with(|| Arc::new(merged))
            .clone()
    }

    /// Resolved style for a widget's own top-level region
    ///
    /// `None` when the widget's UI type identifier is not bound to a region.
    pub fn resolve_for(&self, widget: &dyn StyledWidget) -> Option<Arc<SynthStyle>> {
        let region = self.session.regions().region_for(widget.ui_key())?;
        Some(self.resolve(widget, &region))
    }

    /// Style returned when no rule matches
    pub fn default_style(&self) -> Arc<SynthStyle> {
        self.default_style
            .get_or_init(|| Arc::new(SynthStyle::new().font(self.default_font.clone())))
            .clone()
    }

    /// Component state the engine derives for a widget
    ///
    /// A live selected-UI scope for the widget wins, with `ENABLED` added when
    /// the scoped mask carries no primary bit. Otherwise the widget is enabled
    /// (possibly focused) or disabled.
    pub fn component_state(&self, widget: &dyn StyledWidget) -> ComponentState {
        match self.session.selected_state(widget.id()) {
            Some(selected) if selected.primary().is_empty() => selected | ComponentState::ENABLED,
            Some(selected) => selected,
            None => ComponentState::for_enabled(widget.is_enabled(), widget.is_focus_owner()),
        }
    }

    /// Context for painting `region` of `widget` in its current state
    pub fn context<'a>(&self, widget: &'a dyn StyledWidget, region: &Region) -> SynthContext<'a> {
        let state = self.component_state(widget);
        self.context_with_state(widget, region, state)
    }

    /// Context for painting `region` of `widget` in an explicit state
    pub fn context_with_state<'a>(
        &self,
        widget: &'a dyn StyledWidget,
        region: &Region,
        state: ComponentState,
    ) -> SynthContext<'a> {
        let style = self.resolve(widget, region);
        SynthContext::new(widget, region.clone(), style, state, self.default_font.clone())
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    pub fn clear_cache(&self) {
        let mut cache = self.cache.write();
        tracing::debug!(entries = cache.len(), "cleared style cache");
        cache.clear();
    }

    /// Number of resolved styles currently cached
    pub fn cached_styles(&self) -> usize {
        self.cache.read().len()
    }
}

impl StyleFactory for StyleEngine {
    fn style(&self, widget: &dyn StyledWidget, region: &Region) -> Arc<SynthStyle> {
        self.resolve(widget, region)
    }
}

impl fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleEngine")
            .field("rules", &self.rule_count())
            .field("cached", &self.cached_styles())
            .field("config", &self.config)
            .finish()
    }
}

fn compile<'p, I>(rules: I) -> Result<Vec<StyleRule>>
where
    I: IntoIterator<Item = (Option<&'p str>, Arc<SynthStyle>, MatchKind)>,
{
    rules
        .into_iter()
        .map(|(pattern, style, kind)| StyleRule::new(pattern, style, kind))
        .collect()
}
