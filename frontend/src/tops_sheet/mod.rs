pub mod yw_material_top_sheet;

pub use yw_material_top_sheet::YwMaterialTopSheet;
