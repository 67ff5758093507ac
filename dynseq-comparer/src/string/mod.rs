/// String support. Strings compare through a collation, with case
/// sensitivity decided by the comparer configuration.
mod collation;
mod fold;
mod string_comparer;

pub(crate) use collation::Collation;
pub(crate) use fold::fold_case;
pub(crate) use string_comparer::StringComparer;
