//! Diesel schema for local task persistence.

diesel::table! {
    /// Cached task records.
    tasks (id) {
        /// Task identifier in canonical UUID text form.
        id -> Text,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
    }
}
