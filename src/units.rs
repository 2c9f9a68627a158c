#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

/// Width of one cell in the caller's drawing units.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Width(pub f64);
/// Height of one cell in the caller's drawing units.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Height(pub f64);
