/// Build a [`Row`](crate::stmt::Row) from `column => value` pairs.
#[macro_export]
macro_rules! row {
    (
        $( $column:expr => $value:expr ),* $(,)?
    ) => {
        $crate::stmt::Row::from_iter([
            $( ($column.to_string(), $crate::stmt::Value::from($value)), )*
        ])
    };
}
