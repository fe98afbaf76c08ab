//! Diesel schema for task persistence.

diesel::table! {
    /// Owner-scoped task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Identifier of the owning user.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority level.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
