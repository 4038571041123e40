//! Stash Forms
//!
//! Raw form contents for the create and edit forms, and the conversion
//! between those strings and the host's JSON shapes. Numbers are parsed the
//! way a browser's `parseInt`/`parseFloat` would read the input box; input
//! that does not parse is passed on as `null` and left for the host to judge.

use crate::models::{PayloadVec3, StashPayload, StashRecord, Vec3};
use crate::view_model::format_captured_component;

/// Which form a shared widget belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit,
}

/// Text inputs of a stash form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    StashId,
    Label,
    Slots,
    Weight,
    Code,
    Rotation,
    CoordX,
    CoordY,
    CoordZ,
    SizeX,
    SizeY,
    SizeZ,
}

impl Field {
    /// Suffix of the input's DOM id (`create_<suffix>` / `edit_<suffix>`)
    pub fn dom_suffix(self) -> &'static str {
        match self {
            Self::StashId => "stash_id",
            Self::Label => "label",
            Self::Slots => "slots",
            Self::Weight => "weight",
            Self::Code => "code",
            Self::Rotation => "rotation",
            Self::CoordX => "coords_x",
            Self::CoordY => "coords_y",
            Self::CoordZ => "coords_z",
            Self::SizeX => "size_x",
            Self::SizeY => "size_y",
            Self::SizeZ => "size_z",
        }
    }
}

impl FormKind {
    pub fn dom_id(self, field: Field) -> String {
        let prefix = match self {
            Self::Create => "create",
            Self::Edit => "edit",
        };
        format!("{}_{}", prefix, field.dom_suffix())
    }

    /// Only the create form carries input hints
    pub fn shows_placeholders(self) -> bool {
        matches!(self, Self::Create)
    }
}

/// Three text boxes for a vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vec3Fields {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Vec3Fields {
    fn from_vec3(v: Vec3) -> Self {
        Self {
            x: js_number(v.x),
            y: js_number(v.y),
            z: js_number(v.z),
        }
    }

    fn parse(&self) -> PayloadVec3 {
        PayloadVec3 {
            x: parse_float(&self.x),
            y: parse_float(&self.y),
            z: parse_float(&self.z),
        }
    }
}

/// Contents of a stash form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StashForm {
    pub stash_id: String,
    pub label: String,
    pub slots: String,
    pub weight: String,
    pub code: String,
    pub rotation: String,
    pub coords: Vec3Fields,
    pub size: Vec3Fields,
    pub debug: bool,
}

impl StashForm {
    /// Edit form contents for an existing record
    pub fn from_record(stash: &StashRecord) -> Self {
        Self {
            stash_id: stash.stash_id.clone(),
            label: stash.label.clone(),
            slots: stash.slots.to_string(),
            weight: stash.weight.to_string(),
            code: stash.code.clone(),
            rotation: js_number(stash.rotation.unwrap_or(0.0)),
            coords: Vec3Fields::from_vec3(stash.coords),
            size: Vec3Fields::from_vec3(stash.size),
            debug: stash.debug,
        }
    }

    pub fn to_payload(&self) -> StashPayload {
        StashPayload {
            stash_id: self.stash_id.clone(),
            label: self.label.clone(),
            slots: parse_int(&self.slots),
            weight: parse_int(&self.weight),
            code: self.code.clone(),
            rotation: parse_float(&self.rotation),
            coords: self.coords.parse(),
            size: self.size.parse(),
            debug: self.debug,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::StashId => &self.stash_id,
            Field::Label => &self.label,
            Field::Slots => &self.slots,
            Field::Weight => &self.weight,
            Field::Code => &self.code,
            Field::Rotation => &self.rotation,
            Field::CoordX => &self.coords.x,
            Field::CoordY => &self.coords.y,
            Field::CoordZ => &self.coords.z,
            Field::SizeX => &self.size.x,
            Field::SizeY => &self.size.y,
            Field::SizeZ => &self.size.z,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::StashId => &mut self.stash_id,
            Field::Label => &mut self.label,
            Field::Slots => &mut self.slots,
            Field::Weight => &mut self.weight,
            Field::Code => &mut self.code,
            Field::Rotation => &mut self.rotation,
            Field::CoordX => &mut self.coords.x,
            Field::CoordY => &mut self.coords.y,
            Field::CoordZ => &mut self.coords.z,
            Field::SizeX => &mut self.size.x,
            Field::SizeY => &mut self.size.y,
            Field::SizeZ => &mut self.size.z,
        }
    }

    /// Fill the coordinate boxes from a captured player position.
    /// Nothing else in the form changes.
    pub fn apply_position(&mut self, position: Vec3) {
        self.coords = Vec3Fields {
            x: format_captured_component(position.x),
            y: format_captured_component(position.y),
            z: format_captured_component(position.z),
        };
    }
}

/// Edit form for `stash_id`, or `None` when the snapshot has no such stash
pub fn open_edit_modal(stashes: &[StashRecord], stash_id: &str) -> Option<StashForm> {
    stashes
        .iter()
        .find(|s| s.stash_id == stash_id)
        .map(StashForm::from_record)
}

/// Render a number the way it would appear in a browser input box
fn js_number(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        // browsers switch to exponent form here and always sign the exponent
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    value.to_string()
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// `parseInt(s)` in base 10, hex with a `0x` prefix
pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, rest) = split_sign(s.trim_start());
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// `parseFloat(s)`: longest decimal prefix, `Infinity` included
pub fn parse_float(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let (negative, rest) = split_sign(trimmed);
    let sign = if negative { -1.0 } else { 1.0 };
    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = rest.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits_from(0);
    let mut end = int_end;
    let mut mantissa_digits = int_end;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    rest[..end].parse::<f64>().ok().map(|v| sign * v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{police_storage, stash};

    fn create_form() -> StashForm {
        StashForm {
            stash_id: "gang_locker".to_string(),
            label: "Gang Locker".to_string(),
            slots: "10".to_string(),
            weight: "20".to_string(),
            code: String::new(),
            rotation: String::new(),
            coords: Vec3Fields { x: "1.5".into(), y: "-2".into(), z: "30.25".into() },
            size: Vec3Fields { x: "1".into(), y: "1".into(), z: "2".into() },
            debug: true,
        }
    }

    #[test]
    fn test_parse_int_like_browser() {
        assert_eq!(parse_int("10"), Some(10));
        assert_eq!(parse_int("  42  "), Some(42));
        assert_eq!(parse_int("10.7"), Some(10));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("0x1A"), Some(26));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_parse_float_like_browser() {
        assert_eq!(parse_float("1.5"), Some(1.5));
        assert_eq!(parse_float(" -2.25xyz"), Some(-2.25));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1.5e2x"), Some(150.0));
        assert_eq!(parse_float("3e"), Some(3.0));
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("abc"), None);
    }

    #[test]
    fn test_create_payload_passes_empty_rotation_through() {
        let payload = create_form().to_payload();

        assert_eq!(payload.slots, Some(10));
        assert_eq!(payload.weight, Some(20));
        assert_eq!(payload.rotation, None);
        assert_eq!(payload.coords, PayloadVec3 { x: Some(1.5), y: Some(-2.0), z: Some(30.25) });

        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["rotation"].is_null());
        assert_eq!(body["slots"], serde_json::json!(10));
        assert_eq!(body["debug"], serde_json::json!(true));
    }

    #[test]
    fn test_open_edit_modal_populates_fields() {
        let form = open_edit_modal(&[stash("a", "A"), police_storage()], "police_storage").unwrap();

        assert_eq!(form.stash_id, "police_storage");
        assert_eq!(form.label, "Police Storage");
        assert_eq!(form.code, "1234");
        assert_eq!(form.slots, "50");
        assert_eq!(form.weight, "100");
        assert_eq!(form.rotation, "0");
        assert_eq!(form.coords, Vec3Fields { x: "1".into(), y: "2".into(), z: "3".into() });
        assert_eq!(form.size, Vec3Fields { x: "1".into(), y: "1".into(), z: "1".into() });
        assert!(!form.debug);
    }

    #[test]
    fn test_open_edit_modal_defaults_missing_rotation() {
        let mut record = police_storage();
        record.rotation = None;
        let form = open_edit_modal(&[record.clone()], "police_storage").unwrap();
        assert_eq!(form.rotation, "0");

        record.rotation = Some(90.5);
        let form = open_edit_modal(&[record], "police_storage").unwrap();
        assert_eq!(form.rotation, "90.5");
    }

    #[test]
    fn test_open_edit_modal_unknown_id() {
        assert_eq!(open_edit_modal(&[police_storage()], "nope"), None);
        assert_eq!(open_edit_modal(&[], "police_storage"), None);
    }

    #[test]
    fn test_placeholders_only_on_create() {
        assert!(FormKind::Create.shows_placeholders());
        assert!(!FormKind::Edit.shows_placeholders());
    }

    #[test]
    fn test_js_number_formatting() {
        assert_eq!(js_number(50.0), "50");
        assert_eq!(js_number(1.5), "1.5");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(123456.789), "123456.789");
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(1.5e22), "1.5e+22");
        assert_eq!(js_number(1e-7), "1e-7");
        assert_eq!(js_number(-2.5e-8), "-2.5e-8");
        assert_eq!(js_number(0.000001), "0.000001");
    }

    #[test]
    fn test_edit_round_trip_keeps_values() {
        let form = StashForm::from_record(&police_storage());
        let payload = form.to_payload();
        assert_eq!(payload.slots, Some(50));
        assert_eq!(payload.rotation, Some(0.0));
        assert_eq!(payload.coords, PayloadVec3 { x: Some(1.0), y: Some(2.0), z: Some(3.0) });
    }

    #[test]
    fn test_field_accessors_and_dom_ids() {
        let mut form = StashForm::default();
        *form.field_mut(Field::SizeY) = "2.5".to_string();
        *form.field_mut(Field::Slots) = "8".to_string();

        assert_eq!(form.size.y, "2.5");
        assert_eq!(form.field(Field::Slots), "8");
        assert_eq!(FormKind::Create.dom_id(Field::CoordX), "create_coords_x");
        assert_eq!(FormKind::Edit.dom_id(Field::StashId), "edit_stash_id");
    }

    #[test]
    fn test_apply_position_only_touches_coords() {
        let mut form = create_form();
        let before = form.clone();

        form.apply_position(Vec3::new(215.123456, -810.5, 30.0));

        assert_eq!(
            form.coords,
            Vec3Fields { x: "215.1235".into(), y: "-810.5000".into(), z: "30.0000".into() }
        );
        assert_eq!(form.size, before.size);
        assert_eq!(form.label, before.label);
        assert_eq!(form.rotation, before.rotation);
    }
}
