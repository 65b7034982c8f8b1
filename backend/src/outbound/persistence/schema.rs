//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; regenerate with
//! `diesel print-schema` after a schema change.

diesel::table! {
    /// Restaurant records.
    ///
    /// Only `id` carries a constraint. Every other column is nullable, which
    /// is what allows the literal update semantics (an absent payload field
    /// overwriting a stored name or postal code) to round-trip through the
    /// store. The score columns are written by the external aggregation
    /// process only.
    restaurants (id) {
        /// Primary key, assigned by the sequence.
        id -> Int8,
        name -> Nullable<Varchar>,
        zip_code -> Nullable<Varchar>,
        country -> Nullable<Varchar>,
        city -> Nullable<Varchar>,
        average_score_egg -> Nullable<Float8>,
        average_score_dairy -> Nullable<Float8>,
        average_score_peanut -> Nullable<Float8>,
        overall_score -> Nullable<Float8>,
    }
}
