//! Remote collaborator adapters

mod supabase;

pub use supabase::SupabaseSheets;
