use crate::domain::model::SoldItem;

/// The demonstration batch processed when no input file is given.
pub fn sample_items() -> Vec<SoldItem> {
    vec![
        SoldItem::new(1, "Rock Salt", "RS1", 10, 50, "Andy Ghadban"),
        SoldItem::new(2, "Planter's Nuts", "XO28-V", 4, 23, "Reginald VelJohnson"),
        SoldItem::new(3, "Bulk Pack SuperWash Fire Hoses", "BPSW-FH3", 122, 122, "Harry Lewis"),
        SoldItem::new(4, "BlackBOX carnival sticks", "BBOX4", 215, 460, "Jean-Luc Picard"),
        SoldItem::new(5, "ARMY surplus Canned Beef", "5-ARMYCB", 34, 513, "Jean-Luc Picard"),
        SoldItem::new(6, "Compressed Air", "CA6", 80, 900, "Frank Castle"),
        SoldItem::new(7, "Rock Salt", "RS1", 10, 2, "Reginald VelJohnson"),
        SoldItem::new(8, "Werther's Original", "WO-8", 12, 75, "Andy Ghadban"),
        SoldItem::new(9, "tonka truck passenger door", "TT-PD-9", 336, 275, "Jean-Luc Picard"),
        SoldItem::new(10, "ARMY surplus Canned Beef", "5-ARMYCB", 12, 6000, "Frank Castle"),
        SoldItem::new(11, "SwashBuckler's Buckled Swashes", "SBBS11", 122, 160, "Harry Lewis"),
    ]
}
