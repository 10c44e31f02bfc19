//! Responsive sizing.
//!
//! Terminal widths are classified into five discrete tiers (breakpoints),
//! and every layout decision (element widths, padding, margins, column
//! counts) derives from the active tier. The tiers partition the whole
//! width axis:
//!
//! ```text
//! xs: 0-59   sm: 60-79   md: 80-119   lg: 120-159   xl: 160+
//! ```
//!
//! The [`Responsive`] context is the single piece of shared mutable state
//! in the crate's layout core. It is explicitly constructed and passed by
//! reference to every component that needs sizing; there is no hidden
//! global. Internally a `RwLock` guards the (terminal snapshot, tier) pair:
//! sizing reads take the shared lock, [`Responsive::refresh`] takes the
//! exclusive lock, and readers never observe a tier computed from one probe
//! paired with a width from another.

use std::sync::RwLock;

use crate::term::Terminal;

// =============================================================================
// Breakpoint
// =============================================================================

/// Terminal width class.
///
/// Exactly one breakpoint matches any given width; ordering follows width,
/// so `Xs < Sm < Md < Lg < Xl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Below 60 columns.
    Xs,
    /// 60-79 columns.
    Sm,
    /// 80-119 columns.
    Md,
    /// 120-159 columns.
    Lg,
    /// 160 columns and up.
    Xl,
}

impl Breakpoint {
    /// All tiers, smallest first.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Classify a terminal width in columns.
    ///
    /// Total over all widths: the tier ranges partition `[0, ∞)` with no
    /// gaps or overlaps.
    pub const fn classify(width: usize) -> Breakpoint {
        match width {
            0..=59 => Breakpoint::Xs,
            60..=79 => Breakpoint::Sm,
            80..=119 => Breakpoint::Md,
            120..=159 => Breakpoint::Lg,
            _ => Breakpoint::Xl,
        }
    }

    /// Lowercase display name ("xs".."xl").
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Inclusive lower bound of the tier's column range.
    pub const fn min_width(self) -> usize {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 60,
            Breakpoint::Md => 80,
            Breakpoint::Lg => 120,
            Breakpoint::Xl => 160,
        }
    }

    /// Inclusive upper bound of the tier's column range, `None` for the
    /// open-ended top tier.
    pub const fn max_width(self) -> Option<usize> {
        match self {
            Breakpoint::Xs => Some(59),
            Breakpoint::Sm => Some(79),
            Breakpoint::Md => Some(119),
            Breakpoint::Lg => Some(159),
            Breakpoint::Xl => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 1,
            Breakpoint::Md => 2,
            Breakpoint::Lg => 3,
            Breakpoint::Xl => 4,
        }
    }
}

/// One row of the breakpoint table, with its active flag.
///
/// Produced by [`Responsive::breakpoints`] from a single locked read, so
/// the active flags are always consistent with the current tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointInfo {
    pub breakpoint: Breakpoint,
    pub name: &'static str,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub is_active: bool,
}

// =============================================================================
// Per-tier overrides
// =============================================================================

/// Layout overrides for one tier.
///
/// Unset fields fall through to the component's smart-sizing default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub padding: Option<usize>,
    pub margin: Option<usize>,
    /// Render the compact variant (components reduce padding, drop borders
    /// or collapse to a single line).
    pub compact: bool,
    /// Render the full variant even where the tier would normally compact.
    pub show_full: bool,
}

/// Per-tier override configuration for one component instance.
///
/// Five optional slots, one per tier. Resolution inherits from *smaller*
/// tiers only: a query at tier T walks T, T-1, ... down to Xs and returns
/// the first defined slot. A slot defined only at a larger tier is never
/// used. All-empty configuration resolves to `None` and the component
/// falls back to smart sizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsiveConfig {
    pub xs: Option<ElementConfig>,
    pub sm: Option<ElementConfig>,
    pub md: Option<ElementConfig>,
    pub lg: Option<ElementConfig>,
    pub xl: Option<ElementConfig>,
}

impl ResponsiveConfig {
    /// Resolve the configuration for a tier.
    ///
    /// Walks the slot list from `breakpoint` down to [`Breakpoint::Xs`] and
    /// returns the first defined slot. Never inherits from larger tiers.
    pub fn resolve(&self, breakpoint: Breakpoint) -> Option<&ElementConfig> {
        let slots = [&self.xs, &self.sm, &self.md, &self.lg, &self.xl];
        slots[..=breakpoint.index()]
            .iter()
            .rev()
            .find_map(|slot| slot.as_ref())
    }
}

// =============================================================================
// Responsive context
// =============================================================================

/// How the context obtains terminal snapshots on refresh.
#[derive(Debug, Clone, Copy)]
enum Probe {
    /// Probe the live terminal.
    Live,
    /// Always use a fixed snapshot (tests, injected sizes).
    Fixed(Terminal),
}

/// The (snapshot, tier) pair guarded by the lock. Always updated together.
#[derive(Debug, Clone, Copy)]
struct State {
    terminal: Terminal,
    breakpoint: Breakpoint,
}

/// Caller-owned responsive sizing context.
///
/// Construct one at program start and pass it by reference to the
/// components that need sizing. Reads are cheap shared-lock operations and
/// safe from multiple concurrent rendering call sites; [`Responsive::refresh`]
/// re-probes and re-classifies under the exclusive lock.
///
/// None of the sizing operations fail: a probe error degrades to a fixed
/// 80x24 non-TTY snapshot and degenerate inputs are clamped.
#[derive(Debug)]
pub struct Responsive {
    probe: Probe,
    state: RwLock<State>,
}

impl Responsive {
    /// Probe the live terminal and classify it.
    pub fn new() -> Self {
        Self::build(Probe::Live, Terminal::detect())
    }

    /// Build from a fixed terminal snapshot.
    ///
    /// The snapshot also survives [`Responsive::refresh`], which makes this
    /// the constructor for tests and for environments that manage the
    /// terminal size themselves.
    pub fn with_terminal(terminal: Terminal) -> Self {
        Self::build(Probe::Fixed(terminal), terminal)
    }

    fn build(probe: Probe, terminal: Terminal) -> Self {
        let breakpoint = Breakpoint::classify(terminal.width());
        Responsive {
            probe,
            state: RwLock::new(State {
                terminal,
                breakpoint,
            }),
        }
    }

    fn read(&self) -> State {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Re-probe the terminal and re-classify.
    ///
    /// The probe-then-classify sequence is atomic with respect to readers:
    /// the new snapshot and the tier classified from it are published in one
    /// exclusive-lock write.
    pub fn refresh(&self) {
        let terminal = match self.probe {
            Probe::Live => Terminal::detect(),
            Probe::Fixed(t) => t,
        };
        let breakpoint = Breakpoint::classify(terminal.width());

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = State {
            terminal,
            breakpoint,
        };
    }

    /// The currently active breakpoint.
    pub fn breakpoint(&self) -> Breakpoint {
        self.read().breakpoint
    }

    /// Name of the currently active breakpoint.
    pub fn breakpoint_name(&self) -> &'static str {
        self.breakpoint().name()
    }

    /// The terminal snapshot the current tier was classified from.
    pub fn terminal(&self) -> Terminal {
        self.read().terminal
    }

    /// Whether the given tier is the active one.
    pub fn is(&self, breakpoint: Breakpoint) -> bool {
        self.breakpoint() == breakpoint
    }

    /// Whether the active tier is `breakpoint` or larger.
    pub fn is_at_least(&self, breakpoint: Breakpoint) -> bool {
        self.breakpoint() >= breakpoint
    }

    /// Whether the active tier is `breakpoint` or smaller.
    pub fn is_at_most(&self, breakpoint: Breakpoint) -> bool {
        self.breakpoint() <= breakpoint
    }

    /// The full breakpoint table with active flags.
    ///
    /// Derived from one locked read: the flags can never tear against the
    /// current tier.
    pub fn breakpoints(&self) -> [BreakpointInfo; 5] {
        let active = self.read().breakpoint;
        Breakpoint::ALL.map(|bp| BreakpointInfo {
            breakpoint: bp,
            name: bp.name(),
            min_width: bp.min_width(),
            max_width: bp.max_width(),
            is_active: bp == active,
        })
    }

    /// A fraction of the terminal width, clamped by a tier-dependent margin
    /// reserve.
    ///
    /// The reserve keeps 2/4/8/12/16 columns free at xs/sm/md/lg/xl; the xl
    /// tier additionally caps the result at 120 columns so content never
    /// sprawls across ultra-wide terminals.
    pub fn smart_width(&self, fraction: f64) -> usize {
        let state = self.read();
        let width = state.terminal.width();
        let base = (width as f64 * fraction).floor() as usize;

        let cap = match state.breakpoint {
            Breakpoint::Xs => width.saturating_sub(2),
            Breakpoint::Sm => width.saturating_sub(4),
            Breakpoint::Md => width.saturating_sub(8),
            Breakpoint::Lg => width.saturating_sub(12),
            Breakpoint::Xl => width.saturating_sub(16).min(120),
        };
        base.min(cap)
    }

    /// Element padding appropriate for the active tier.
    pub fn smart_padding(&self) -> usize {
        padding_for(self.breakpoint())
    }

    /// Element margin appropriate for the active tier.
    pub fn smart_margin(&self) -> usize {
        margin_for(self.breakpoint())
    }

    /// Optimal number of side-by-side columns for items of `content_width`.
    ///
    /// Divides the width remaining after margins by the item width plus a
    /// 2-column gutter, floors the result at one column, and caps it per
    /// tier (1/2/3/4/6). A zero content width is treated as 20.
    pub fn optimal_columns(&self, content_width: usize) -> usize {
        let state = self.read();
        let margin = margin_for(state.breakpoint);
        let available = state.terminal.width().saturating_sub(margin * 2);

        let content_width = if content_width == 0 { 20 } else { content_width };
        let columns = (available / (content_width + 2)).max(1);

        let cap = match state.breakpoint {
            Breakpoint::Xs => 1,
            Breakpoint::Sm => 2,
            Breakpoint::Md => 3,
            Breakpoint::Lg => 4,
            Breakpoint::Xl => 6,
        };
        columns.min(cap)
    }

    /// Resolve a component's per-tier overrides against the active tier.
    ///
    /// `None` when no configuration was supplied, or when resolution walks
    /// off the bottom of the slot list; the caller then uses its own
    /// smart-sizing defaults.
    pub fn resolve<'c>(&self, config: Option<&'c ResponsiveConfig>) -> Option<&'c ElementConfig> {
        config.and_then(|c| c.resolve(self.breakpoint()))
    }
}

impl Default for Responsive {
    fn default() -> Self {
        Self::new()
    }
}

const fn padding_for(breakpoint: Breakpoint) -> usize {
    match breakpoint {
        Breakpoint::Xs => 0,
        Breakpoint::Sm | Breakpoint::Md => 1,
        Breakpoint::Lg | Breakpoint::Xl => 2,
    }
}

const fn margin_for(breakpoint: Breakpoint) -> usize {
    match breakpoint {
        Breakpoint::Xs => 1,
        Breakpoint::Sm => 2,
        Breakpoint::Md => 4,
        Breakpoint::Lg => 6,
        Breakpoint::Xl => 8,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at_width(width: usize) -> Responsive {
        Responsive::with_terminal(Terminal::fixed(width, 24, false))
    }

    // ── classification ──

    #[test]
    fn classify_boundaries() {
        assert_eq!(Breakpoint::classify(0), Breakpoint::Xs);
        assert_eq!(Breakpoint::classify(59), Breakpoint::Xs);
        assert_eq!(Breakpoint::classify(60), Breakpoint::Sm);
        assert_eq!(Breakpoint::classify(79), Breakpoint::Sm);
        assert_eq!(Breakpoint::classify(80), Breakpoint::Md);
        assert_eq!(Breakpoint::classify(119), Breakpoint::Md);
        assert_eq!(Breakpoint::classify(120), Breakpoint::Lg);
        assert_eq!(Breakpoint::classify(159), Breakpoint::Lg);
        assert_eq!(Breakpoint::classify(160), Breakpoint::Xl);
        assert_eq!(Breakpoint::classify(5000), Breakpoint::Xl);
    }

    #[test]
    fn classify_partitions_width_axis() {
        // Every width matches exactly one tier's declared range.
        for width in 0..400 {
            let matching = Breakpoint::ALL
                .iter()
                .filter(|bp| {
                    width >= bp.min_width()
                        && bp.max_width().is_none_or(|max| width <= max)
                })
                .count();
            assert_eq!(matching, 1, "width {} matched {} tiers", width, matching);
            let bp = Breakpoint::classify(width);
            assert!(width >= bp.min_width());
            assert!(bp.max_width().is_none_or(|max| width <= max));
        }
    }

    #[test]
    fn breakpoint_ordering() {
        assert!(Breakpoint::Xs < Breakpoint::Sm);
        assert!(Breakpoint::Md < Breakpoint::Xl);
    }

    #[test]
    fn active_flags_match_current_tier() {
        let ctx = at_width(100);
        let table = ctx.breakpoints();
        for info in table {
            assert_eq!(info.is_active, info.breakpoint == Breakpoint::Md);
        }
        assert_eq!(table.iter().filter(|i| i.is_active).count(), 1);
    }

    // ── context state ──

    #[test]
    fn context_pairs_tier_with_snapshot() {
        let ctx = at_width(70);
        assert_eq!(ctx.breakpoint(), Breakpoint::Sm);
        assert_eq!(ctx.terminal().width(), 70);
        assert_eq!(ctx.breakpoint_name(), "sm");
    }

    #[test]
    fn fixed_context_survives_refresh() {
        let ctx = at_width(150);
        ctx.refresh();
        assert_eq!(ctx.breakpoint(), Breakpoint::Lg);
        assert_eq!(ctx.terminal().width(), 150);
    }

    #[test]
    fn comparisons() {
        let ctx = at_width(100);
        assert!(ctx.is(Breakpoint::Md));
        assert!(ctx.is_at_least(Breakpoint::Sm));
        assert!(ctx.is_at_least(Breakpoint::Md));
        assert!(!ctx.is_at_least(Breakpoint::Lg));
        assert!(ctx.is_at_most(Breakpoint::Lg));
        assert!(!ctx.is_at_most(Breakpoint::Sm));
    }

    #[test]
    fn concurrent_reads_during_refresh() {
        use std::thread;

        let ctx = at_width(100);
        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..500 {
                        // Snapshot and tier must always agree.
                        let term = ctx.terminal();
                        let bp = ctx.breakpoint();
                        assert_eq!(bp, Breakpoint::classify(term.width()));
                    }
                });
            }
            scope.spawn(|| {
                for _ in 0..500 {
                    ctx.refresh();
                }
            });
        });
    }

    // ── smart sizing ──

    #[test]
    fn smart_width_applies_tier_reserve() {
        assert_eq!(at_width(40).smart_width(1.0), 38); // xs: -2
        assert_eq!(at_width(70).smart_width(1.0), 66); // sm: -4
        assert_eq!(at_width(100).smart_width(1.0), 92); // md: -8
        assert_eq!(at_width(130).smart_width(1.0), 118); // lg: -12
    }

    #[test]
    fn smart_width_fraction_floor() {
        // floor(70 * 0.5) = 35, well under the sm reserve of 66.
        assert_eq!(at_width(70).smart_width(0.5), 35);
    }

    #[test]
    fn smart_width_xl_caps_at_120() {
        assert_eq!(at_width(200).smart_width(1.0), 120);
        assert_eq!(at_width(500).smart_width(1.0), 120);
        // Just past the xl boundary the cap still dominates the -16 reserve.
        assert_eq!(at_width(161).smart_width(1.0), 120);
    }

    #[test]
    fn smart_padding_table() {
        assert_eq!(at_width(40).smart_padding(), 0);
        assert_eq!(at_width(70).smart_padding(), 1);
        assert_eq!(at_width(100).smart_padding(), 1);
        assert_eq!(at_width(130).smart_padding(), 2);
        assert_eq!(at_width(200).smart_padding(), 2);
    }

    #[test]
    fn smart_margin_table() {
        assert_eq!(at_width(40).smart_margin(), 1);
        assert_eq!(at_width(70).smart_margin(), 2);
        assert_eq!(at_width(100).smart_margin(), 4);
        assert_eq!(at_width(130).smart_margin(), 6);
        assert_eq!(at_width(200).smart_margin(), 8);
    }

    #[test]
    fn optimal_columns_end_to_end_sm() {
        // 70 cols → sm → margin 2 → available 66 → 66/22 = 3 → capped to 2.
        let ctx = at_width(70);
        assert_eq!(ctx.smart_padding(), 1);
        assert_eq!(ctx.smart_margin(), 2);
        assert_eq!(ctx.optimal_columns(20), 2);
    }

    #[test]
    fn optimal_columns_caps_per_tier() {
        // Plenty of room everywhere; the per-tier cap decides.
        assert_eq!(at_width(59).optimal_columns(5), 1);
        assert_eq!(at_width(79).optimal_columns(5), 2);
        assert_eq!(at_width(119).optimal_columns(5), 3);
        assert_eq!(at_width(159).optimal_columns(5), 4);
        assert_eq!(at_width(300).optimal_columns(5), 6);
    }

    #[test]
    fn optimal_columns_floor_is_one() {
        assert_eq!(at_width(10).optimal_columns(50), 1);
    }

    #[test]
    fn optimal_columns_zero_content_width_treated_as_20() {
        let ctx = at_width(100);
        assert_eq!(ctx.optimal_columns(0), ctx.optimal_columns(20));
    }

    // ── override resolution ──

    fn cfg(width: usize) -> ElementConfig {
        ElementConfig {
            width: Some(width),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_exact_slot() {
        let config = ResponsiveConfig {
            md: Some(cfg(90)),
            ..Default::default()
        };
        assert_eq!(config.resolve(Breakpoint::Md), Some(&cfg(90)));
    }

    #[test]
    fn resolve_falls_back_to_smaller_tier_only() {
        // Defined at xs and lg; a query at md must resolve to xs: the lg
        // slot is larger than md and is never inherited downward.
        let config = ResponsiveConfig {
            xs: Some(cfg(30)),
            lg: Some(cfg(110)),
            ..Default::default()
        };
        assert_eq!(config.resolve(Breakpoint::Md), Some(&cfg(30)));
        assert_eq!(config.resolve(Breakpoint::Sm), Some(&cfg(30)));
        assert_eq!(config.resolve(Breakpoint::Lg), Some(&cfg(110)));
        assert_eq!(config.resolve(Breakpoint::Xl), Some(&cfg(110)));
    }

    #[test]
    fn resolve_nothing_below() {
        let config = ResponsiveConfig {
            xl: Some(cfg(120)),
            ..Default::default()
        };
        assert_eq!(config.resolve(Breakpoint::Md), None);
        assert_eq!(config.resolve(Breakpoint::Xl), Some(&cfg(120)));
    }

    #[test]
    fn resolve_empty_config_is_none() {
        let config = ResponsiveConfig::default();
        for bp in Breakpoint::ALL {
            assert_eq!(config.resolve(bp), None);
        }
    }

    #[test]
    fn resolve_through_context() {
        let ctx = at_width(100); // md
        let config = ResponsiveConfig {
            sm: Some(cfg(60)),
            ..Default::default()
        };
        assert_eq!(ctx.resolve(Some(&config)), Some(&cfg(60)));
        assert_eq!(ctx.resolve(None), None);
    }
}
