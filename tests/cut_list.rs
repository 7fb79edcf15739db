use door_frame_toolbox::{
    catalog::{CatalogStore, Catalogs, CloserRecord, HardwareKind, HardwareRecord, LockRecord},
    door::{
        bars_for, compute, CloserSelection, CutListError, DoorCategory, DoorConfiguration,
        DoorType, EdgeSealing, FrameMode, FrameVariant, LockDirection, LockSelection, ManualLock,
        PieceKind, StructureType, ValidationRule, MAX_DIMENSION_MM,
    },
    logging,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "actual={actual} expected={expected}"
    );
}

fn fireproof_simple() -> DoorConfiguration {
    DoorConfiguration::new(DoorCategory::Fireproof, DoorType::Simple, 2100, 900)
}

fn manual_lock(length: i64, offset_bottom: i64) -> Option<LockSelection> {
    Some(LockSelection {
        name: None,
        manual: Some(ManualLock {
            length,
            offset_bottom,
        }),
    })
}

fn electric_lock_door(category: DoorCategory) -> DoorConfiguration {
    let mut door = DoorConfiguration::new(category, DoorType::ElectricLock, 2100, 900);
    door.lock = manual_lock(200, 50);
    door.lock_height = Some(200);
    door
}

#[test]
fn fireproof_simple_door_totals() {
    logging::init_test();
    let res = compute(&fireproof_simple(), &Catalogs::new()).expect("simple door");
    assert_eq!(res.variant, FrameVariant::FireproofNormal);
    assert_eq!(res.inner_width, 760);
    assert_eq!(res.plywood_width, 760);
    assert_eq!(res.plywood_height, 1900);
    assert_eq!(res.vertical_piece_length, 2100);
    assert_eq!(res.horizontal_pieces_length, 760);
    assert_eq!(res.total_wood_length, 5720);
    assert_eq!(res.total_wood_bars, 3);
    assert!(res.lock_fillers.is_none());
    assert!(res.warnings.is_empty());
}

#[test]
fn finish_adjustment_grows_frame() {
    let mut door = fireproof_simple();
    door.edge_sealing = EdgeSealing::Iron1mm;
    let res = compute(&door, &Catalogs::new()).expect("iron finish");
    assert_eq!(res.frame_height, 2105);
    assert_eq!(res.frame_width, 905);
    assert_eq!(res.inner_width, 765);
    assert_eq!(res.total_wood_length, 5740);
    assert_eq!(res.total_wood_bars, 3);
    assert_close(res.edge_sealing_thickness_mm, 1.0);
}

#[test]
fn totals_scale_with_door_count() {
    let mut door = fireproof_simple();
    door.num_doors = 3;
    let res = compute(&door, &Catalogs::new()).expect("three doors");
    assert_eq!(res.total_wood_length, 5720 * 3);
    assert_eq!(res.total_wood_bars, 8);
    let vertical = res
        .pieces
        .iter()
        .find(|p| p.kind == PieceKind::RightVertical)
        .expect("right vertical");
    assert_eq!(vertical.total_count(res.num_doors), Some(3));
}

#[test]
fn electric_lock_bottom_fillers() {
    let door = electric_lock_door(DoorCategory::Fireproof);
    let res = compute(&door, &Catalogs::new()).expect("electric lock");
    let f = res.lock_fillers.expect("fillers");
    assert_eq!(f.outer_bottom, 150);
    assert_eq!(f.inner_bottom, 120);
    assert_eq!(f.outer_upper, 1750);
    assert_eq!(f.inner_upper, 1675);
    assert_eq!(res.inner_width, 690);
    // 우측 세로목 + 보강목 4개 + 가로목 2개
    assert_eq!(res.total_wood_length, 2100 + 3695 + 690 * 2);
    assert_eq!(res.total_wood_bars, 3);
}

#[test]
fn filler_sum_is_direction_independent() {
    for (door_type, lock_height) in [
        (DoorType::ElectricLock, 200),
        (DoorType::ElectricLock, 1050),
        (DoorType::BoxLock, 980),
    ] {
        let mut door = electric_lock_door(DoorCategory::Fireproof);
        door.door_type = door_type;
        door.lock_height = Some(lock_height);
        door.lock_direction = LockDirection::Bottom;
        let bottom = compute(&door, &Catalogs::new()).expect("bottom");
        door.lock_direction = LockDirection::Top;
        let top = compute(&door, &Catalogs::new()).expect("top");
        assert_eq!(
            bottom.lock_fillers.expect("bottom fillers").sum(),
            top.lock_fillers.expect("top fillers").sum()
        );
    }
}

#[test]
fn top_direction_reports_negative_filler() {
    let mut door = electric_lock_door(DoorCategory::Fireproof);
    door.lock_direction = LockDirection::Top;
    let res = compute(&door, &Catalogs::new()).expect("top lock");
    let f = res.lock_fillers.expect("fillers");
    assert_eq!(f.outer_upper, 50);
    assert_eq!(f.inner_upper, -25);
    assert_eq!(f.outer_bottom, 1850);
    assert_eq!(f.inner_bottom, 1820);
    assert!(res.warnings.iter().any(|w| w.contains("inner_upper")));
}

#[test]
fn box_lock_uses_smaller_upper_clearance() {
    let mut door = electric_lock_door(DoorCategory::Fireproof);
    door.door_type = DoorType::BoxLock;
    let res = compute(&door, &Catalogs::new()).expect("box lock");
    let f = res.lock_fillers.expect("fillers");
    assert_eq!(f.outer_upper - f.inner_upper, 30);
}

#[test]
fn lock_height_gets_finish_adjustment() {
    let mut door = electric_lock_door(DoorCategory::Fireproof);
    door.edge_sealing = EdgeSealing::IronGraphite2mm;
    let res = compute(&door, &Catalogs::new()).expect("graphite finish");
    assert_eq!(res.lock_height, Some(203));
    assert_eq!(res.frame_height, 2105);
    assert_eq!(res.lock_fillers.expect("fillers").outer_bottom, 153);
}

#[test]
fn compute_is_idempotent() {
    let door = electric_lock_door(DoorCategory::NonFireproof);
    let catalogs = Catalogs::new();
    let first = compute(&door, &catalogs).expect("first");
    let second = compute(&door, &catalogs).expect("second");
    assert_eq!(first, second);
}

#[test]
fn bars_are_ceiling_of_total() {
    assert_eq!(bars_for(0), 0);
    assert_eq!(bars_for(2400), 1);
    assert_eq!(bars_for(2401), 2);
    assert_eq!(bars_for(-500), 0);
}

#[test]
fn ub_boundary_is_inclusive() {
    let mut door = fireproof_simple();
    door.mode = FrameMode::Ub;
    door.frame_height = None;
    door.max_height = Some(2100);
    door.min_height = Some(2000);
    door.ub_wood_width = Some(100);
    let res = compute(&door, &Catalogs::new()).expect("difference equals ub width");
    assert_eq!(res.variant, FrameVariant::FireproofUb);
    assert_eq!(res.frame_height, 2100);
    assert_eq!(res.plywood_height, 1800);
    assert!(res.pieces.iter().any(|p| p.kind == PieceKind::UbHorizontal));
    assert_eq!(res.total_wood_length, 2100 * 2 + 760 * 3);

    door.min_height = Some(1999);
    let err = compute(&door, &Catalogs::new()).expect_err("difference too large");
    assert_eq!(
        err,
        CutListError::Validation {
            field: "ub_wood_width",
            rule: ValidationRule::UbHeightRange {
                difference: 101,
                limit: 100
            },
        }
    );
}

#[test]
fn ub_requires_fireproof() {
    let mut door = fireproof_simple();
    door.category = DoorCategory::NonFireproof;
    door.mode = FrameMode::Ub;
    let err = compute(&door, &Catalogs::new()).expect_err("ub non-fireproof");
    assert_eq!(err.field(), Some("mode"));
}

#[test]
fn missing_lock_height_is_validation_error() {
    let mut door = electric_lock_door(DoorCategory::Fireproof);
    door.lock_height = None;
    let err = compute(&door, &Catalogs::new()).expect_err("no lock height");
    assert_eq!(err, CutListError::missing("lock_height"));
}

#[test]
fn unknown_lock_without_fallback_is_lookup_error() {
    let mut door = electric_lock_door(DoorCategory::Fireproof);
    door.lock = Some(LockSelection {
        name: Some("EL-900".to_string()),
        manual: None,
    });
    let err = compute(&door, &Catalogs::new()).expect_err("unknown lock");
    assert_eq!(
        err,
        CutListError::Lookup {
            kind: HardwareKind::ElectricLock,
            name: "EL-900".to_string()
        }
    );

    door.lock = Some(LockSelection {
        name: Some("EL-900".to_string()),
        manual: Some(ManualLock {
            length: 200,
            offset_bottom: 50,
        }),
    });
    let res = compute(&door, &Catalogs::new()).expect("manual fallback");
    assert_eq!(res.lock, Some(LockRecord::new(200, 50)));
}

#[test]
fn catalog_lock_and_closer_are_resolved_independently() {
    let mut catalogs = Catalogs::new();
    catalogs
        .put(
            HardwareKind::BoxLock,
            "BX-1",
            HardwareRecord::Lock(LockRecord {
                length: 240,
                offset_bottom: 60,
                offset_top: 180,
            }),
        )
        .expect("put lock");
    catalogs
        .put(
            HardwareKind::ConcealedCloser,
            "DC-300",
            HardwareRecord::Closer(CloserRecord { length: 300 }),
        )
        .expect("put closer");

    let mut door = DoorConfiguration::new(DoorCategory::Fireproof, DoorType::BoxLock, 2100, 900);
    door.lock = Some(LockSelection {
        name: Some("BX-1".to_string()),
        manual: None,
    });
    door.lock_height = Some(1000);
    door.concealed_closer = Some(CloserSelection {
        name: Some("DC-300".to_string()),
        length: None,
    });

    let res = compute(&door, &catalogs).expect("fireproof closer");
    assert_eq!(res.concealed_closer_length, Some(300));
    assert_eq!(res.plywood_height, 2100 - 200 - 100);
    assert_eq!(res.very_upper_horizontal_piece_length, Some(690 - 300));
    assert_eq!(res.lock_fillers.expect("fillers").outer_bottom, 940);

    door.category = DoorCategory::NonFireproof;
    let res = compute(&door, &catalogs).expect("non-fireproof closer");
    assert_eq!(res.very_upper_horizontal_piece_length, Some(690 - 300 - 70));
    assert!(res
        .pieces
        .iter()
        .any(|p| p.kind == PieceKind::ReinforceConcealed && p.length == 70));
}

#[test]
fn simple_door_ignores_closer() {
    let mut door = fireproof_simple();
    door.concealed_closer = Some(CloserSelection {
        name: Some("DC-300".to_string()),
        length: None,
    });
    let res = compute(&door, &Catalogs::new()).expect("closer ignored");
    assert_eq!(res.plywood_height, 1900);
    assert!(res.very_upper_horizontal_piece_length.is_none());
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn fireproof_ignores_structure_type() {
    let mut door = fireproof_simple();
    door.structure_type = StructureType::Yipaiyikong;
    let res = compute(&door, &Catalogs::new()).expect("fireproof");
    assert!(res.structure.is_none());
    assert_eq!(res.total_wood_length, 5720);
}

#[test]
fn yipaiyikong_simple_slats() {
    let mut door = DoorConfiguration::new(DoorCategory::NonFireproof, DoorType::Simple, 2100, 900);
    door.structure_type = StructureType::Yipaiyikong;
    door.gap_width = Some(200);
    let res = compute(&door, &Catalogs::new()).expect("yipaiyikong");
    let q = res.structure.expect("structure");
    assert_eq!(q.slats_width, 100);
    assert_eq!(q.slats_count, 6);
    assert_eq!(q.total_blocks, Some(10));
    assert_eq!(q.slats_length, 760);
    assert_eq!(res.total_wood_length, 2100 * 2 + 760 * 2 + 760 * 6);
    assert_eq!(res.total_wood_bars, 5);
}

#[test]
fn yipaiyikong_requires_gap_width() {
    let mut door = DoorConfiguration::new(DoorCategory::NonFireproof, DoorType::Simple, 2100, 900);
    door.structure_type = StructureType::Yipaiyikong;
    let err = compute(&door, &Catalogs::new()).expect_err("no gap width");
    assert_eq!(err, CutListError::missing("gap_width"));
}

#[test]
fn structural_lock_door_narrows_inner_width() {
    let mut door = electric_lock_door(DoorCategory::NonFireproof);
    door.structure_type = StructureType::Yipaiyikong;
    door.gap_width = Some(200);
    door.lock_height = Some(1000);
    let res = compute(&door, &Catalogs::new()).expect("structural lock");
    assert_eq!(res.inner_width, 620);
    let gap_lock = res
        .pieces
        .iter()
        .find(|p| p.kind == PieceKind::GapWoodLock)
        .expect("gap wood lock");
    assert_eq!((gap_lock.width, gap_lock.length, gap_lock.count_per_door), (70, 200, 4));
    assert!(res.pieces.iter().any(|p| p.kind == PieceKind::LeftVertical));
}

#[test]
fn honeycomb_board_lock_gaps() {
    let mut door = electric_lock_door(DoorCategory::NonFireproof);
    door.structure_type = StructureType::HoneycombBoard;
    door.lock_height = Some(1000);
    let res = compute(&door, &Catalogs::new()).expect("board");
    let q = res.structure.expect("structure");
    assert_eq!(q.slats_count, 2);
    assert_close(q.gap_width.expect("gap width"), 1700.0 / 3.0);
    assert_close(q.gap_length.expect("gap length"), 567.0);

    door.concealed_closer = Some(CloserSelection {
        name: None,
        length: Some(300),
    });
    let res = compute(&door, &Catalogs::new()).expect("board with closer");
    let q = res.structure.expect("structure");
    assert_close(q.gap_width.expect("gap width"), 1700.0 / 3.0);
    assert_close(q.gap_length.expect("gap length"), 534.0);
}

#[test]
fn honeycomb_board_simple_gaps() {
    let mut door = DoorConfiguration::new(DoorCategory::NonFireproof, DoorType::Simple, 2100, 900);
    door.structure_type = StructureType::HoneycombBoard;
    door.lock_height = Some(1000);
    door.reinforce_wood = Some(100);
    let res = compute(&door, &Catalogs::new()).expect("board simple");
    let q = res.structure.expect("structure");
    assert_close(q.gap_length_bottom.expect("bottom"), 750.0);
    assert_close(q.gap_length_upper.expect("upper"), 850.0);
}

#[test]
fn honeycomb_paper_gaps_stay_fractional() {
    let mut door = electric_lock_door(DoorCategory::NonFireproof);
    door.structure_type = StructureType::HoneycombPaper;
    door.slats_width = Some(50);
    door.lock_height = Some(1000);
    let res = compute(&door, &Catalogs::new()).expect("paper lock");
    let q = res.structure.expect("structure");
    assert_eq!(q.slats_count, 4);
    assert_close(q.gap_width.expect("gap width"), 360.0);
    assert_close(q.gap_length.expect("gap length"), 340.0);

    let mut door = DoorConfiguration::new(DoorCategory::NonFireproof, DoorType::Simple, 2100, 900);
    door.structure_type = StructureType::HoneycombPaper;
    door.slats_width = Some(50);
    door.lock_height = Some(1000);
    door.reinforce_wood = Some(100);
    let res = compute(&door, &Catalogs::new()).expect("paper simple");
    let q = res.structure.expect("structure");
    assert_close(q.gap_length_bottom.expect("bottom"), 375.0);
    assert_close(q.gap_length_upper.expect("upper"), 637.5);
}

#[test]
fn honeycomb_simple_requires_reinforce_wood() {
    let mut door = DoorConfiguration::new(DoorCategory::NonFireproof, DoorType::Simple, 2100, 900);
    door.structure_type = StructureType::HoneycombPaper;
    door.lock_height = Some(1000);
    let err = compute(&door, &Catalogs::new()).expect_err("no reinforce");
    assert_eq!(err, CutListError::missing("reinforce_wood"));
}

#[test]
fn non_positive_width_is_rejected() {
    let mut door = fireproof_simple();
    door.left_vpiece_width = 0;
    let err = compute(&door, &Catalogs::new()).expect_err("zero width");
    assert_eq!(
        err,
        CutListError::Validation {
            field: "left_vpiece_width",
            rule: ValidationRule::NotPositive("0".to_string()),
        }
    );
}

#[test]
fn job_file_deserializes() {
    let content = include_str!("../demos/fireproof_electric_lock.toml");
    let door: DoorConfiguration = toml::from_str(content).expect("job toml");
    assert_eq!(door.edge_sealing, EdgeSealing::Iron1mm);
    assert_eq!(door.mode, FrameMode::Normal);
    assert_eq!(door.concealed_wood_width, 100);

    let res = compute(&door, &Catalogs::new()).expect("job compute");
    assert_eq!(res.frame_height, 2105);
    assert_eq!(res.lock_height, Some(1004));
    assert_eq!(res.concealed_closer_length, Some(300));
    assert_eq!(res.very_upper_horizontal_piece_length, Some(695 - 300));
}

#[test]
fn honeycomb_paper_lock_with_closer() {
    let mut door = electric_lock_door(DoorCategory::NonFireproof);
    door.structure_type = StructureType::HoneycombPaper;
    door.slats_width = Some(50);
    door.lock_height = Some(1000);
    door.concealed_closer = Some(CloserSelection {
        name: None,
        length: Some(300),
    });
    let res = compute(&door, &Catalogs::new()).expect("paper lock with closer");
    assert_eq!(res.inner_width, 620);
    assert_eq!(res.plywood_height, 1800);
    assert_eq!(res.very_upper_horizontal_piece_length, Some(620 - 300 - 70));
    let q = res.structure.expect("structure");
    assert_eq!(q.slats_count, 4);
    // (2100 - 6*50 - 100) / 5, (2100 - 4*50 - 100 - 100 - 100) / 5
    assert_close(q.gap_width.expect("gap width"), 340.0);
    assert_close(q.gap_length.expect("gap length"), 320.0);
}

#[test]
fn yipaiyikong_closer_shortens_slat_span() {
    let mut door = electric_lock_door(DoorCategory::NonFireproof);
    door.structure_type = StructureType::Yipaiyikong;
    door.gap_width = Some(170);
    door.lock_height = Some(1000);
    let res = compute(&door, &Catalogs::new()).expect("without closer");
    let q = res.structure.expect("structure");
    assert_eq!(res.plywood_height, 1900);
    assert_eq!(q.slats_count, 7);
    assert_eq!(q.total_blocks, Some(11));

    door.concealed_closer = Some(CloserSelection {
        name: None,
        length: Some(300),
    });
    let res = compute(&door, &Catalogs::new()).expect("with closer");
    let q = res.structure.expect("structure");
    assert_eq!(res.plywood_height, 1800);
    assert_eq!(q.slats_count, 6);
    assert_eq!(q.total_blocks, Some(10));
}

#[test]
fn ub_lock_door_fills_from_max_height() {
    let mut door = electric_lock_door(DoorCategory::Fireproof);
    door.mode = FrameMode::Ub;
    door.frame_height = None;
    door.max_height = Some(2200);
    door.min_height = Some(2150);
    door.ub_wood_width = Some(100);
    let res = compute(&door, &Catalogs::new()).expect("ub electric lock");
    assert_eq!(res.variant, FrameVariant::FireproofUb);
    assert_eq!(res.frame_height, 2200);
    assert_eq!(res.plywood_height, 1900);

    let f = res.lock_fillers.expect("fillers");
    assert_eq!(f.outer_bottom, 150);
    assert_eq!(f.inner_bottom, 120);
    assert_eq!(f.outer_upper, 1850);
    assert_eq!(f.inner_upper, 1775);

    let ub = res
        .pieces
        .iter()
        .find(|p| p.kind == PieceKind::UbHorizontal)
        .expect("ub horizontal");
    assert_eq!((ub.width, ub.length, ub.count_per_door), (100, 690, 1));
    assert_eq!(res.total_wood_length, 2200 + 3895 + 690 * 3);
    assert_eq!(res.total_wood_bars, 4);

    door.door_type = DoorType::BoxLock;
    let res = compute(&door, &Catalogs::new()).expect("ub box lock");
    assert_eq!(res.lock_fillers.expect("box fillers").inner_upper, 1820);
}

#[test]
fn non_fireproof_plain_lock_door_pieces() {
    let door = electric_lock_door(DoorCategory::NonFireproof);
    let res = compute(&door, &Catalogs::new()).expect("plain lock");
    assert_eq!(res.variant, FrameVariant::NonFireproofPlain);
    assert_eq!(res.inner_width, 690);
    let kinds: Vec<PieceKind> = res.pieces.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PieceKind::RightVertical,
            PieceKind::LeftVertical,
            PieceKind::OuterUpperFiller,
            PieceKind::OuterBottomFiller,
            PieceKind::UpperHorizontal,
            PieceKind::LowerHorizontal,
        ]
    );
    assert_eq!(res.total_wood_length, 2100 * 2 + 1750 + 150 + 690 * 2);
    assert_eq!(res.total_wood_bars, 4);
}

#[test]
fn huge_door_count_is_rejected() {
    let mut door = fireproof_simple();
    door.num_doors = i64::MAX / 1000;
    let err = compute(&door, &Catalogs::new()).expect_err("total overflows");
    assert_eq!(
        err,
        CutListError::Validation {
            field: "num_doors",
            rule: ValidationRule::TotalOverflow,
        }
    );

    door.num_doors = 1_000;
    let res = compute(&door, &Catalogs::new()).expect("large but representable");
    assert_eq!(res.total_wood_length, 5720 * 1_000);
}

#[test]
fn oversized_dimension_is_rejected() {
    let mut door = fireproof_simple();
    door.frame_width = i64::MAX;
    let err = compute(&door, &Catalogs::new()).expect_err("frame width too large");
    assert_eq!(
        err,
        CutListError::Validation {
            field: "frame_width",
            rule: ValidationRule::TooLarge {
                value: i64::MAX,
                limit: MAX_DIMENSION_MM,
            },
        }
    );

    let mut door = electric_lock_door(DoorCategory::Fireproof);
    door.lock = Some(LockSelection {
        name: None,
        manual: Some(ManualLock {
            length: 200,
            offset_bottom: i64::MIN,
        }),
    });
    let err = compute(&door, &Catalogs::new()).expect_err("offset too large");
    assert_eq!(err.field(), Some("lock_offset_bottom"));
}
