/// Build a flat `Vec<Identifier>` from values and (nested) arrays or vecs.
///
/// ```
/// use legends_batch::{ids, Identifier};
///
/// let ids = ids![19, [7u64, 3], "Chalop"];
/// assert_eq!(ids.len(), 4);
/// assert_eq!(ids[3], Identifier::Name("Chalop".into()));
/// ```
#[macro_export]
macro_rules! ids {
    () => {
        ::std::vec::Vec::<$crate::Identifier>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::ids::flatten([$($crate::ids::IdArg::from($arg)),+])
    };
}
