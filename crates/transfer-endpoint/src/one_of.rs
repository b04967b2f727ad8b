use crate::diagnostics::{AttrPath, DiagnosticKind, Diagnostics};

/// One arm of a one-of block: its attribute name and whether it is populated
pub type Arm = (&'static str, bool);

/// true when exactly one arm is populated, otherwise report ambiguity.
/// There is no first-match fallback: ambiguity is always surfaced.
pub fn exactly_one(path: &AttrPath, arms: &[Arm], diags: &mut Diagnostics) -> bool {
    let found = populated(arms);
    if found.len() == 1 {
        return true;
    }
    diags.error(
        path,
        DiagnosticKind::StructuralAmbiguity {
            expected: arms.iter().map(|(name, _)| *name).collect(),
            found,
        },
    );
    false
}

pub fn populated(arms: &[Arm]) -> Vec<&'static str> {
    arms.iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| *name)
        .collect()
}

/// required sub block, reported when missing
pub fn required<'a, T>(
    block: Option<&'a T>,
    name: &'static str,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<&'a T> {
    if block.is_none() {
        diags.error(path, DiagnosticKind::MissingRequiredSubBlock(name));
    }
    block
}
