//! Per-state looks.
//!
//! A component is drawn with one of three looks: normal, hovered or clicked.
//! Callers describe only what differs; [`resolve_looks`] fills in the rest so
//! that clicked falls back to hovered, and hovered falls back to normal.

use easel_ui_graphics::{Color, ColorError, ColorSpec};
use indexmap::IndexMap;

use crate::interaction::DisplayState;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookError {
    #[error("unrecognized look parameter '{0}'")]
    UnrecognizedParameter(String),
    #[error("look parameter '{key}' takes 1 to 3 states, got {len}")]
    InvalidLookArity { key: String, len: usize },
    #[error("look parameter '{key}' expects {expected}, got {found:?}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        found: ParamValue,
    },
    #[error("look parameter '{0}' is missing")]
    MissingParameter(String),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// A dynamically typed look value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParamValue {
    #[default]
    None,
    Bool(bool),
    Int(i32),
    Text(String),
    Color(ColorSpec),
}

impl ParamValue {
    pub fn is_none(&self) -> bool {
        matches!(self, ParamValue::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ParamValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Resolves a color value. Text is treated as a color name and `None`
    /// means "no color".
    pub fn as_color(&self) -> Result<Option<Color>, ColorError> {
        match self {
            ParamValue::None => Ok(None),
            ParamValue::Color(spec) => spec.resolve().map(Some),
            ParamValue::Text(name) => Color::named(name).map(Some),
            other => Err(ColorError::InvalidColorInput(format!("{other:?}"))),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<Color> for ParamValue {
    fn from(value: Color) -> Self {
        ParamValue::Color(ColorSpec::Color(value))
    }
}

impl From<ColorSpec> for ParamValue {
    fn from(value: ColorSpec) -> Self {
        ParamValue::Color(value)
    }
}

impl From<(u8, u8, u8)> for ParamValue {
    fn from(value: (u8, u8, u8)) -> Self {
        ParamValue::Color(value.into())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::None, Into::into)
    }
}

/// One state's slot in a per-state look parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateValue {
    Explicit(ParamValue),
    /// Take the value the previous state resolved to.
    Inherit,
}

macro_rules! state_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StateValue {
                fn from(value: $ty) -> Self {
                    StateValue::Explicit(value.into())
                }
            }
        )*
    };
}

state_value_from!(ParamValue, bool, i32, &str, String, Color, ColorSpec, (u8, u8, u8));

#[derive(Clone, Debug, PartialEq)]
enum ParamEntry {
    Scalar(ParamValue),
    States(Vec<StateValue>),
}

/// Look parameters as written by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookParams {
    entries: IndexMap<String, ParamEntry>,
    hovered: IndexMap<String, StateValue>,
    clicked: IndexMap<String, StateValue>,
}

impl LookParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the normal value of `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.entries
            .insert(key.into(), ParamEntry::Scalar(value.into()));
        self
    }

    /// Sets `key` per state: normal, then hovered, then clicked.
    pub fn states<I>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateValue>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entries.insert(key.into(), ParamEntry::States(values));
        self
    }

    pub fn hovered(mut self, key: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.hovered.insert(key.into(), value.into());
        self
    }

    pub fn clicked(mut self, key: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.clicked.insert(key.into(), value.into());
        self
    }

    pub fn with_hovered<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<StateValue>,
    {
        self.hovered
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_clicked<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<StateValue>,
    {
        self.clicked
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.hovered.is_empty() && self.clicked.is_empty()
    }
}

/// A fully populated, ordered look.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookSpec {
    values: IndexMap<String, ParamValue>,
}

impl LookSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn require(&self, key: &str) -> Result<&ParamValue, LookError> {
        self.values
            .get(key)
            .ok_or_else(|| LookError::MissingParameter(key.to_string()))
    }

    fn invalid(&self, key: &str, expected: &'static str, found: &ParamValue) -> LookError {
        LookError::InvalidValue {
            key: key.to_string(),
            expected,
            found: found.clone(),
        }
    }

    pub fn bool(&self, key: &str) -> Result<bool, LookError> {
        let value = self.require(key)?;
        match value {
            ParamValue::None => Ok(false),
            other => other
                .as_bool()
                .ok_or_else(|| self.invalid(key, "a boolean", other)),
        }
    }

    /// Integer value, or `None` when the parameter is unset.
    pub fn int(&self, key: &str) -> Result<Option<i32>, LookError> {
        let value = self.require(key)?;
        match value {
            ParamValue::None => Ok(None),
            other => other
                .as_int()
                .map(Some)
                .ok_or_else(|| self.invalid(key, "an integer", other)),
        }
    }

    pub fn text(&self, key: &str) -> Result<Option<&str>, LookError> {
        let value = self.require(key)?;
        match value {
            ParamValue::None => Ok(None),
            other => other
                .as_text()
                .map(Some)
                .ok_or_else(|| self.invalid(key, "a string", other)),
        }
    }

    pub fn color(&self, key: &str) -> Result<Option<Color>, LookError> {
        Ok(self.require(key)?.as_color()?)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for LookSpec {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The three looks after inheritance has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLooks {
    pub normal: LookSpec,
    pub hovered: Option<LookSpec>,
    pub clicked: Option<LookSpec>,
}

impl ResolvedLooks {
    pub fn look_for(&self, state: DisplayState) -> &LookSpec {
        look_chain(state, &self.normal, &self.hovered, &self.clicked)
    }
}

fn look_chain<'a, T>(
    state: DisplayState,
    normal: &'a T,
    hovered: &'a Option<T>,
    clicked: &'a Option<T>,
) -> &'a T {
    let clicked = if state == DisplayState::Clicked {
        clicked.as_ref()
    } else {
        None
    };
    let hovered = if state != DisplayState::Normal {
        hovered.as_ref()
    } else {
        None
    };
    clicked.or(hovered).unwrap_or(normal)
}

fn overlay(base: &LookSpec, slots: &IndexMap<String, StateValue>) -> LookSpec {
    let mut look = base.clone();
    for (key, slot) in slots {
        if let StateValue::Explicit(value) = slot {
            look.insert(key.clone(), value.clone());
        }
    }
    look
}

/// Expands caller parameters into normal, hovered and clicked looks.
///
/// With `strict`, a key missing from `defaults` is an error. Otherwise the
/// key's normal value is kept and its per-state overrides are dropped.
pub fn resolve_looks(
    params: &LookParams,
    defaults: &LookSpec,
    strict: bool,
) -> Result<ResolvedLooks, LookError> {
    let mut normal = defaults.clone();
    let mut hovered_slots: IndexMap<String, StateValue> = IndexMap::new();
    let mut clicked_slots: IndexMap<String, StateValue> = IndexMap::new();

    for (key, entry) in &params.entries {
        let known = defaults.contains_key(key);
        if !known && strict {
            return Err(LookError::UnrecognizedParameter(key.clone()));
        }

        let (first, hovered, clicked) = match entry {
            ParamEntry::Scalar(value) => (StateValue::Explicit(value.clone()), None, None),
            ParamEntry::States(values) => match values.as_slice() {
                [n] => (n.clone(), None, None),
                [n, h] => (n.clone(), Some(h), None),
                [n, h, c] => (n.clone(), Some(h), Some(c)),
                _ => {
                    return Err(LookError::InvalidLookArity {
                        key: key.clone(),
                        len: values.len(),
                    })
                }
            },
        };

        match first {
            StateValue::Explicit(value) => normal.insert(key.clone(), value),
            StateValue::Inherit if !known => normal.insert(key.clone(), ParamValue::None),
            StateValue::Inherit => {}
        }

        if !known {
            if hovered.is_some() || clicked.is_some() {
                log::debug!("dropping per-state overrides of unrecognized look parameter '{key}'");
            }
            continue;
        }
        if let Some(slot) = hovered {
            hovered_slots.insert(key.clone(), slot.clone());
        }
        if let Some(slot) = clicked {
            clicked_slots.insert(key.clone(), slot.clone());
        }
    }

    for (shorthand, slots) in [
        (&params.hovered, &mut hovered_slots),
        (&params.clicked, &mut clicked_slots),
    ] {
        for (key, slot) in shorthand {
            if !defaults.contains_key(key) {
                if strict {
                    return Err(LookError::UnrecognizedParameter(key.clone()));
                }
                log::debug!("dropping override of unrecognized look parameter '{key}'");
                continue;
            }
            slots.insert(key.clone(), slot.clone());
        }
    }

    let hovered = (!hovered_slots.is_empty()).then(|| overlay(&normal, &hovered_slots));
    let clicked = (!clicked_slots.is_empty())
        .then(|| overlay(hovered.as_ref().unwrap_or(&normal), &clicked_slots));

    Ok(ResolvedLooks {
        normal,
        hovered,
        clicked,
    })
}

/// Builds a typed look from a resolved [`LookSpec`].
pub trait FromLookSpec: Sized {
    fn from_look_spec(spec: &LookSpec) -> Result<Self, LookError>;
}

/// Typed looks for the three display states.
#[derive(Clone, Debug, PartialEq)]
pub struct LookSet<T> {
    normal: T,
    hovered: Option<T>,
    clicked: Option<T>,
}

impl<T> LookSet<T> {
    pub fn uniform(look: T) -> Self {
        Self {
            normal: look,
            hovered: None,
            clicked: None,
        }
    }

    pub fn normal(&self) -> &T {
        &self.normal
    }

    pub fn look_for(&self, state: DisplayState) -> &T {
        look_chain(state, &self.normal, &self.hovered, &self.clicked)
    }

    /// The explicitly resolved looks, normal first.
    pub fn iter(&self) -> impl Iterator<Item = (DisplayState, &T)> {
        std::iter::once((DisplayState::Normal, &self.normal))
            .chain(self.hovered.iter().map(|look| (DisplayState::Hovered, look)))
            .chain(self.clicked.iter().map(|look| (DisplayState::Clicked, look)))
    }
}

impl<T: FromLookSpec> LookSet<T> {
    pub fn from_resolved(looks: &ResolvedLooks) -> Result<Self, LookError> {
        Ok(Self {
            normal: T::from_look_spec(&looks.normal)?,
            hovered: looks.hovered.as_ref().map(T::from_look_spec).transpose()?,
            clicked: looks.clicked.as_ref().map(T::from_look_spec).transpose()?,
        })
    }

    pub fn resolve(params: &LookParams, defaults: &LookSpec, strict: bool) -> Result<Self, LookError> {
        Self::from_resolved(&resolve_looks(params, defaults, strict)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> LookSpec {
        LookSpec::new().with("a", 1).with("b", 2).with("c", 3)
    }

    fn spec(values: &[(&str, i32)]) -> LookSpec {
        values.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn hovered_override_with_inherited_normal() {
        let params = LookParams::new()
            .set("a", 10)
            .states("b", [StateValue::Inherit, 20.into()]);
        let looks = resolve_looks(&params, &abc(), true).expect("resolves");

        assert_eq!(looks.normal, spec(&[("a", 10), ("b", 2), ("c", 3)]));
        assert_eq!(looks.hovered, Some(spec(&[("a", 10), ("b", 20), ("c", 3)])));
        assert_eq!(looks.clicked, None);
    }

    #[test]
    fn clicked_inherits_through_hovered() {
        let defaults = abc().with("d", 4);
        let params = LookParams::new()
            .states("a", [10])
            .states("b", [StateValue::Inherit, 20.into()])
            .states("c", [30.into(), StateValue::Inherit, 40.into()])
            .states("d", [StateValue::Inherit, 40.into(), StateValue::Inherit]);
        let looks = resolve_looks(&params, &defaults, true).expect("resolves");

        assert_eq!(
            looks.normal,
            spec(&[("a", 10), ("b", 2), ("c", 30), ("d", 4)])
        );
        assert_eq!(
            looks.hovered,
            Some(spec(&[("a", 10), ("b", 20), ("c", 30), ("d", 40)]))
        );
        assert_eq!(
            looks.clicked,
            Some(spec(&[("a", 10), ("b", 20), ("c", 40), ("d", 40)]))
        );
    }

    #[test]
    fn shorthand_mappings_match_inline_states() {
        let inline = LookParams::new().states("a", [1.into(), 5.into(), StateValue::Inherit]);
        let shorthand = LookParams::new()
            .set("a", 1)
            .hovered("a", 5)
            .clicked("a", StateValue::Inherit);
        let defaults = abc();

        assert_eq!(
            resolve_looks(&inline, &defaults, true),
            resolve_looks(&shorthand, &defaults, true)
        );
    }

    #[test]
    fn clicked_without_hovered_falls_back_to_normal() {
        let params = LookParams::new().set("a", 7).with_clicked([("b", 9)]);
        let looks = resolve_looks(&params, &abc(), true).expect("resolves");

        assert_eq!(looks.hovered, None);
        assert_eq!(looks.clicked, Some(spec(&[("a", 7), ("b", 9), ("c", 3)])));
        assert_eq!(looks.look_for(DisplayState::Hovered), &looks.normal);
    }

    #[test]
    fn arity_is_checked() {
        let empty: [i32; 0] = [];
        assert_eq!(
            resolve_looks(&LookParams::new().states("a", empty), &abc(), true),
            Err(LookError::InvalidLookArity {
                key: "a".into(),
                len: 0
            })
        );
        assert!(matches!(
            resolve_looks(&LookParams::new().states("a", [1, 2, 3, 4]), &abc(), true),
            Err(LookError::InvalidLookArity { len: 4, .. })
        ));
    }

    #[test]
    fn unknown_keys_fail_only_when_strict() {
        let params = LookParams::new().states("z", [1, 2]);
        assert_eq!(
            resolve_looks(&params, &abc(), true),
            Err(LookError::UnrecognizedParameter("z".into()))
        );

        let looks = resolve_looks(&params, &abc(), false).expect("lenient");
        assert_eq!(looks.normal.get("z"), Some(&ParamValue::Int(1)));
        assert_eq!(looks.hovered, None);
    }

    #[test]
    fn typed_getters_report_mismatches() {
        let look = LookSpec::new()
            .with("color", "red")
            .with("width", ParamValue::None)
            .with("bold", 3);

        assert_eq!(look.color("color"), Ok(Some(Color::rgb(255, 0, 0))));
        assert_eq!(look.int("width"), Ok(None));
        assert!(matches!(
            look.bool("bold"),
            Err(LookError::InvalidValue { .. })
        ));
        assert!(matches!(
            look.color("bold"),
            Err(LookError::Color(ColorError::InvalidColorInput(_)))
        ));
        assert_eq!(
            look.int("missing"),
            Err(LookError::MissingParameter("missing".into()))
        );
    }

    #[derive(Debug, PartialEq)]
    struct Width(i32);

    impl FromLookSpec for Width {
        fn from_look_spec(spec: &LookSpec) -> Result<Self, LookError> {
            Ok(Width(spec.int("a")?.unwrap_or(0)))
        }
    }

    #[test]
    fn look_set_follows_the_fallback_chain() {
        let params = LookParams::new().states("a", [1, 2]);
        let set = LookSet::<Width>::resolve(&params, &abc(), true).expect("resolves");

        assert_eq!(set.look_for(DisplayState::Normal), &Width(1));
        assert_eq!(set.look_for(DisplayState::Hovered), &Width(2));
        assert_eq!(set.look_for(DisplayState::Clicked), &Width(2));
        assert_eq!(set.iter().count(), 2);
    }
}
