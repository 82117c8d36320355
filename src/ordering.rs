/// Equality expressed through the ordering alone.
///
/// The value type is only required to provide `<` as a strict weak
/// ordering, so two values count as equal iff neither is less than
/// the other. Values in the same equivalence class are merged by the
/// interval map even when they are distinguishable otherwise.
pub(crate) fn eq_by_ordering<V: PartialOrd>(a: &V, b: &V) -> bool {
    !(a < b) && !(b < a)
}
