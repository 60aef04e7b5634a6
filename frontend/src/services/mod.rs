//! Browser-side implementations of the `common` traits, plus `localStorage`.

pub mod relay;
pub mod storage;
pub mod supabase;
