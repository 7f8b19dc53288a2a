// Crate-internal.
// ---

pub(crate) mod exporters {
    pub(crate) mod csv_sheet_exporter;
    pub(crate) mod svg_card_renderer;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod exporters {
        pub use crate::impl_ext::exporters::csv_sheet_exporter::*;
        pub use crate::impl_ext::exporters::svg_card_renderer::*;
    }
}
