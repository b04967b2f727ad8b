//!
//! # Scalar and collection adapters
//!
//! Move plain values between [`Field`] and wire scalars. The wire has no notion
//! of absence, a zero value stands for "not set". Reading back uses the prior
//! field to tell an explicit zero (`""`, `[]`, `0`, `false`) from an omitted one.
//!
use crate::diagnostics::{AttrPath, DiagnosticKind, Diagnostics};
use crate::field::Field;

/// Wire scalar with a protobuf zero value
pub trait WireScalar: Clone + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool;
}

impl WireScalar for String {
    fn zero() -> Self {
        String::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl WireScalar for i64 {
    fn zero() -> Self {
        0
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl WireScalar for bool {
    fn zero() -> Self {
        false
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl<T: Clone + PartialEq> WireScalar for Vec<T> {
    fn zero() -> Self {
        Vec::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

pub(crate) fn report_unresolved(path: &AttrPath, diags: &mut Diagnostics) {
    diags.error(path, DiagnosticKind::UnresolvedValue);
}

pub(crate) fn report_missing(path: &AttrPath, diags: &mut Diagnostics) {
    diags.error(path, DiagnosticKind::MissingRequiredValue);
}

/// absent maps to the wire default
pub fn to_wire<T: WireScalar>(field: &Field<T>, path: &AttrPath, diags: &mut Diagnostics) -> T {
    match field {
        Field::Known(value) => value.clone(),
        Field::Absent => T::zero(),
        Field::Unresolved => {
            report_unresolved(path, diags);
            T::zero()
        }
    }
}

/// like [`to_wire`] but an absent value is reported
pub fn required_to_wire<T: WireScalar>(
    field: &Field<T>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> T {
    if field.is_absent() {
        report_missing(path, diags);
    }
    to_wire(field, path, diags)
}

pub fn from_wire<T: WireScalar>(wire: &T, prior: &Field<T>) -> Field<T> {
    if !wire.is_zero() {
        return Field::Known(wire.clone());
    }
    match prior {
        Field::Absent => Field::Absent,
        // the author spelled out the zero value or the server now answered
        Field::Known(_) | Field::Unresolved => Field::Known(wire.clone()),
    }
}

/// port numbers must fit the u16 range
pub fn port_to_wire(field: &Field<i64>, path: &AttrPath, diags: &mut Diagnostics) -> i64 {
    let port = to_wire(field, path, diags);
    if !(0..=i64::from(u16::MAX)).contains(&port) {
        diags.error(
            path,
            DiagnosticKind::InvalidValue(format!("port {port} is out of range")),
        );
    }
    port
}

/// `prior` of a nested block, absent when the block itself was not there
pub fn prior_field<'a, B, T>(block: Option<&'a B>, get: impl FnOnce(&'a B) -> &'a Field<T>) -> Field<T>
where
    T: Clone + 'a,
{
    block.map(get).cloned().unwrap_or_default()
}

/// List of nested records, absent maps to no items.
/// Each item is converted under its indexed path.
pub fn records_to_wire<F, W>(
    field: &Field<Vec<F>>,
    path: &AttrPath,
    diags: &mut Diagnostics,
    mut convert: impl FnMut(&F, &AttrPath, &mut Diagnostics) -> W,
) -> Vec<W> {
    match field {
        Field::Known(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| convert(item, &path.index(idx), diags))
            .collect(),
        Field::Absent => Vec::new(),
        Field::Unresolved => {
            report_unresolved(path, diags);
            Vec::new()
        }
    }
}

/// Inverse of [`records_to_wire`]. Items are merged with the prior item at the
/// same position, an empty wire list keeps the prior absent or known state.
pub fn records_from_wire<W, F>(
    wire: &[W],
    prior: &Field<Vec<F>>,
    path: &AttrPath,
    diags: &mut Diagnostics,
    mut convert: impl FnMut(&W, Option<&F>, &AttrPath, &mut Diagnostics) -> F,
) -> Field<Vec<F>> {
    let prior_items: &[F] = match prior {
        Field::Known(items) => items,
        Field::Absent | Field::Unresolved => &[],
    };
    if wire.is_empty() {
        return match prior {
            Field::Absent => Field::Absent,
            Field::Known(_) | Field::Unresolved => Field::Known(Vec::new()),
        };
    }
    Field::Known(
        wire.iter()
            .enumerate()
            .map(|(idx, item)| convert(item, prior_items.get(idx), &path.index(idx), diags))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_wire_default() {
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("x");
        assert_eq!(to_wire::<String>(&Field::Absent, &path, &mut diags), "");
        assert_eq!(to_wire::<i64>(&Field::Absent, &path, &mut diags), 0);
        assert!(!to_wire::<bool>(&Field::Absent, &path, &mut diags));
        let list = to_wire::<Vec<String>>(&Field::Absent, &path, &mut diags);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 0);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unresolved_in_request_is_error() {
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("postgres_source").child("database");
        to_wire::<String>(&Field::Unresolved, &path, &mut diags);
        let errors: Vec<_> = diags.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, DiagnosticKind::UnresolvedValue);
        assert_eq!(errors[0].path, path);
    }

    #[test]
    fn test_explicit_empty_list_round_trip() {
        //given
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("tables");
        let empty: Field<Vec<String>> = Field::Known(vec![]);
        let absent: Field<Vec<String>> = Field::Absent;

        //when
        let wire_empty = to_wire(&empty, &path, &mut diags);
        let wire_absent = to_wire(&absent, &path, &mut diags);

        //then
        assert_eq!(from_wire(&wire_empty, &empty), empty);
        assert_eq!(from_wire(&wire_absent, &absent), absent);
    }

    #[test]
    fn test_wire_value_wins() {
        assert_eq!(
            from_wire(&"db".to_owned(), &Field::Absent),
            Field::Known("db".to_owned())
        );
        assert_eq!(from_wire(&5432, &Field::Known(6432)), Field::Known(5432));
        assert_eq!(from_wire(&false, &Field::Known(true)), Field::Known(false));
        assert_eq!(from_wire(&0, &Field::Unresolved), Field::Known(0));
    }

    #[test]
    fn test_integer_list_round_trip() {
        let mut diags = Diagnostics::new();
        let ids: Field<Vec<i64>> = Field::Known(vec![123, -1, i64::MAX]);
        let wire = to_wire(&ids, &AttrPath::root("account_ids"), &mut diags);
        assert_eq!(wire, vec![123, -1, i64::MAX]);
        assert_eq!(from_wire(&wire, &Field::Absent), ids);
    }

    #[test]
    fn test_prior_field_of_missing_block() {
        let block = Field::Known("pg-1".to_owned());
        assert_eq!(prior_field(Some(&block), |b| b), block);
        assert_eq!(prior_field::<Field<String>, String>(None, |b| b), Field::Absent);
    }

    #[test]
    fn test_record_list_keeps_empty_and_absent() {
        //given
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("streams");
        let empty: Field<Vec<String>> = Field::Known(vec![]);
        let absent: Field<Vec<String>> = Field::Absent;
        let convert = |item: &String, _: &AttrPath, _: &mut Diagnostics| item.len() as i64;
        let back = |len: &i64, _: Option<&String>, _: &AttrPath, _: &mut Diagnostics| len.to_string();

        //when
        let wire_empty = records_to_wire(&empty, &path, &mut diags, convert);
        let wire_absent = records_to_wire(&absent, &path, &mut diags, convert);

        //then
        assert!(wire_empty.is_empty());
        assert!(wire_absent.is_empty());
        assert_eq!(records_from_wire(&wire_empty, &empty, &path, &mut diags, back), empty);
        assert_eq!(records_from_wire(&wire_absent, &absent, &path, &mut diags, back), absent);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_record_list_items_use_indexed_path_and_prior() {
        //given
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("custom_queries");
        let prior = Field::Known(vec!["a".to_owned(), "b".to_owned()]);

        //when
        let wire = records_to_wire(&prior, &path, &mut diags, |item, item_path, _| {
            format!("{item_path}={item}")
        });
        let merged = records_from_wire(&wire, &prior, &path, &mut diags, |item, prior, _, _| {
            format!("{item}|{}", prior.map(String::as_str).unwrap_or("-"))
        });

        //then
        assert_eq!(wire, vec!["custom_queries[0]=a", "custom_queries[1]=b"]);
        assert_eq!(
            merged,
            Field::Known(vec![
                "custom_queries[0]=a|a".to_owned(),
                "custom_queries[1]=b|b".to_owned()
            ])
        );
    }

    #[test]
    fn test_unresolved_record_list_is_error() {
        let mut diags = Diagnostics::new();
        let field: Field<Vec<String>> = Field::Unresolved;
        let wire = records_to_wire(&field, &AttrPath::root("shards"), &mut diags, |item, _, _| {
            item.clone()
        });
        assert!(wire.is_empty());
        assert!(diags.has_errors());
    }

    #[test]
    fn test_port_range() {
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("port");
        assert_eq!(port_to_wire(&Field::Known(5432), &path, &mut diags), 5432);
        assert!(diags.is_empty());
        port_to_wire(&Field::Known(70000), &path, &mut diags);
        assert!(diags.has_errors());
    }
}
