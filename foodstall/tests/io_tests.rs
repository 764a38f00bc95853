#[cfg(test)]
mod tests {
    use anyhow::Result;
    use float_cmp::approx_eq;
    use test_case::test_case;

    use foodstall::compute;
    use foodstall::entities::{Crop, CropSpec, CropTable};
    use foodstall::io::ext_repr::ExtCropTable;
    use foodstall::io::{export, export_crop_table, import_crop_table};

    #[test]
    fn empty_table_is_default() -> Result<()> {
        let table = import_crop_table(&ExtCropTable::default())?;
        assert_eq!(table, CropTable::default());
        Ok(())
    }

    #[test]
    fn partial_override() -> Result<()> {
        let ext: ExtCropTable = serde_json::from_str(r#"{ "radish": { "yield_per_seed": 30 } }"#)?;
        let table = import_crop_table(&ext)?;
        assert_eq!(table.spec(Crop::Radish), CropSpec::new(1, 30));
        assert_eq!(table.spec(Crop::Tomato), CropTable::default().spec(Crop::Tomato));
        Ok(())
    }

    #[test]
    fn crop_table_survives_export() -> Result<()> {
        let mut table = CropTable::default();
        table.set_spec(Crop::Garlic, CropSpec::new(2, 7));
        let json = serde_json::to_string(&export_crop_table(&table))?;
        let ext: ExtCropTable = serde_json::from_str(&json)?;
        assert_eq!(import_crop_table(&ext)?, table);
        Ok(())
    }

    #[test_case(r#"{ "pumpkin": { "slots_per_seed": 1 } }"#; "unknown crop")]
    #[test_case(r#"{ "Onion": { "slots_per_seed": 0 } }"#; "zero slots")]
    #[test_case(r#"{ "Onion": { "yield_per_seed": 0 } }"#; "zero yield")]
    #[test_case(r#"{ "Cabbage": { "slots_per_seed": 65 } }"#; "seed larger than a box")]
    fn invalid_tables_are_rejected(json: &str) {
        let ext: ExtCropTable = serde_json::from_str(json).unwrap();
        assert!(import_crop_table(&ext).is_err());
    }

    #[test]
    fn export_thousand() {
        let result = compute(1000, 3, &CropTable::default()).unwrap();
        let ext = export(&result);

        assert_eq!(ext.target, 1000);
        assert_eq!(ext.crops.len(), 7);
        assert_eq!(ext.crops[0].name, "Radish");
        assert_eq!(ext.crops[0].needed, 750);
        assert_eq!(ext.planter_boxes.len(), 4);
        assert_eq!(ext.planter_boxes[0].box_number, 1);
        assert_eq!(ext.planter_boxes[0].remaining_slots, 17);
        assert_eq!(ext.planter_boxes[0].total_slots, 64);
        assert_eq!(ext.total_boxes_needed, 4);
        assert!(!ext.can_produce_with_boxes);
        assert_eq!(ext.brine_barrels.len(), 6);
        assert_eq!(ext.brine_barrels[2].name, "Cabbage (for kimchi)");
        assert_eq!(ext.kimchi_produced, 1008);
        assert_eq!(ext.pickles_produced, 1008);
        // 47 + 40 + 28 + 56 slots planted out of 4 * 64
        assert!(approx_eq!(f32, ext.density, 171.0 / 256.0, ulps = 2));
    }
}
