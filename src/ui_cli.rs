use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::catalog::{
    CatalogStore, CloserRecord, HardwareCatalog, HardwareKind, HardwareRecord, LockRecord,
};
use crate::config::Config;
use crate::door::edge_sealing::{finishes, find_finish};
use crate::door::form::fields;
use crate::door::{
    compute, CutListResult, DoorCategory, DoorType, FormInput, FrameMode, StructureType,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    ElectricLocks,
    BoxLocks,
    Closers,
    Finishes,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Door Frame Toolbox ===");
    println!("1) 재단 목록 계산");
    println!("2) 전기락 카탈로그");
    println!("3) 박스락 카탈로그");
    println!("4) 도어클로저 카탈로그");
    println!("5) 엣지 실링 목록");
    println!("6) 설정");
    println!("0) 종료");
    select_menu(&mut io::stdin().lock())
}

/// 입력이 끝나면(EOF) 종료로 본다.
fn select_menu<R: BufRead>(input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, "메뉴 선택: ") {
            Ok(sel) => sel,
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::ElectricLocks),
            "3" => return Ok(MenuChoice::BoxLocks),
            "4" => return Ok(MenuChoice::Closers),
            "5" => return Ok(MenuChoice::Finishes),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 재단 계산 메뉴를 처리한다. 입력 오류는 출력만 하고 메뉴로 돌아간다.
pub fn handle_calculate<S: CatalogStore>(cfg: &Config, store: &S) -> Result<(), AppError> {
    println!("\n-- 재단 목록 계산 --");
    let form = collect_form(cfg, store)?;
    match form.to_configuration().and_then(|door| compute(&door, store)) {
        Ok(result) => print_cut_list(&result),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn collect_form<S: CatalogStore>(cfg: &Config, store: &S) -> Result<FormInput, AppError> {
    let d = &cfg.defaults;
    let mut form = FormInput::new();

    let category = read_choice("도어 분류", &DoorCategory::ALL.map(|c| (c.code(), c.label())))?;
    form.set(fields::CATEGORY, category);
    let fireproof = DoorCategory::from_code(category) == Some(DoorCategory::Fireproof);

    if fireproof {
        let mode = read_choice(
            "프레임 방식",
            &FrameMode::ALL.map(|m| (m.code(), m.code())),
        )?;
        form.set(fields::MODE, mode);
    } else {
        let structure = read_choice(
            "내부 구조",
            &StructureType::ALL.map(|s| (s.code(), s.label())),
        )?;
        form.set(fields::STRUCTURE_TYPE, structure);
    }
    let door_type = read_choice("도어 형식", &DoorType::ALL.map(|t| (t.code(), t.label())))?;
    form.set(fields::DOOR_TYPE, door_type);

    form.set(fields::NUM_DOORS, read_default("도어 수량", "1")?);
    form.set(
        fields::RIGHT_VPIECE_WIDTH,
        read_default("우측 세로목 폭 [mm]", &d.right_vpiece_width.to_string())?,
    );
    form.set(
        fields::LEFT_VPIECE_WIDTH,
        read_default("좌측 세로목 폭 [mm]", &d.left_vpiece_width.to_string())?,
    );
    form.set(
        fields::UPPER_HPIECE_WIDTH,
        read_default("상부 가로목 폭 [mm]", &d.upper_hpiece_width.to_string())?,
    );
    form.set(
        fields::LOWER_HPIECE_WIDTH,
        read_default("하부 가로목 폭 [mm]", &d.lower_hpiece_width.to_string())?,
    );

    let sealing = read_default("엣지 실링 (코드, 목록에 없으면 custom)", d.edge_sealing.code())?;
    if find_finish(&sealing).is_none() {
        form.set(fields::EDGE_SEALING_THICKNESS, read_line("마감 두께 [mm]: ")?);
    }
    form.set(fields::EDGE_SEALING_TYPE, sealing);

    if form.get(fields::MODE) == Some(FrameMode::Ub.code()) {
        form.set(fields::MAX_HEIGHT, read_line("최대 높이 [mm]: ")?);
        form.set(fields::MIN_HEIGHT, read_line("최소 높이 [mm]: ")?);
        form.set(
            fields::UB_WOOD_WIDTH,
            read_default("UB 보강목 폭 [mm]", &d.ub_wood_width.to_string())?,
        );
    } else {
        form.set(fields::FRAME_HEIGHT, read_line("프레임 높이 [mm]: ")?);
    }
    form.set(fields::FRAME_WIDTH, read_line("프레임 폭 [mm]: ")?);

    let has_lock = DoorType::from_code(door_type).is_some_and(|t| t.has_lock());
    if has_lock {
        form.set(fields::LOCK_NAME, read_line("락 이름 (카탈로그, 없으면 엔터): ")?);
        form.set(fields::LOCK_LENGTH, read_line("수동 락 길이 [mm] (없으면 엔터): ")?);
        if form.get(fields::LOCK_LENGTH).is_some() {
            form.set(fields::LOCK_OFFSET_BOTTOM, read_line("수동 락 하단 오프셋 [mm]: ")?);
        }
        form.set(fields::LOCK_HEIGHT, read_line("락 높이 [mm]: ")?);
        form.set(fields::LOCK_DIRECTION, read_default("락 기준 (top/bottom)", "bottom")?);
        form.set(
            fields::CONCEALED_DOOR_CLOSER_NAME,
            read_line("도어클로저 이름 (없으면 엔터): ")?,
        );
        if let Some(name) = form.get(fields::CONCEALED_DOOR_CLOSER_NAME).map(str::to_string) {
            if store.closer(&name).is_none() {
                println!("카탈로그에 없는 도어클로저입니다.");
                form.set(
                    fields::CONCEALED_DOOR_CLOSER_LENGTH,
                    read_line("수동 도어클로저 길이 [mm]: ")?,
                );
            }
            form.set(
                fields::CONCEALED_WOOD_WIDTH,
                read_default("최상단 가로목 폭 [mm]", &d.concealed_wood_width.to_string())?,
            );
        }
    }

    match form
        .get(fields::STRUCTURE_TYPE)
        .and_then(StructureType::from_code)
    {
        Some(StructureType::Yipaiyikong) => {
            form.set(fields::SLATS_WIDTH, read_line("살대 폭 [mm] (엔터: 하부 가로목 폭): ")?);
            form.set(fields::GAP_WIDTH, read_line("살대 간격 [mm]: ")?);
        }
        Some(StructureType::HoneycombBoard | StructureType::HoneycombPaper) => {
            form.set(fields::SLATS_WIDTH, read_line("살대 폭 [mm] (엔터: 하부 가로목 폭): ")?);
            if !has_lock {
                form.set(fields::LOCK_HEIGHT, read_line("손잡이 높이 [mm]: ")?);
                form.set(fields::REINFORCE_WOOD, read_line("손잡이 보강목 폭 [mm]: ")?);
            }
        }
        _ => {}
    }
    Ok(form)
}

/// 계산 결과를 표 형태로 출력한다.
pub fn print_cut_list(result: &CutListResult) {
    println!("\n== 재단 결과 ({:?}, {}) ==", result.variant, result.door_type.label());
    println!(
        "프레임: {} x {} mm, 마감 두께 {} mm",
        result.frame_height, result.frame_width, result.edge_sealing_thickness_mm
    );
    if let Some(lock_height) = result.lock_height {
        println!("락 높이: {lock_height} mm");
    }
    println!(
        "내폭(합판 폭): {} mm, 합판 높이: {} mm",
        result.inner_width, result.plywood_height
    );
    println!(
        "세로목: {} mm, 가로목: {} mm",
        result.vertical_piece_length, result.horizontal_pieces_length
    );
    if let Some(v) = result.very_upper_horizontal_piece_length {
        println!("최상단 가로목: {v} mm");
    }
    if let Some(f) = &result.lock_fillers {
        println!(
            "락 보강목: 상부 바깥 {} / 상부 안쪽 {} / 하부 바깥 {} / 하부 안쪽 {} mm",
            f.outer_upper, f.inner_upper, f.outer_bottom, f.inner_bottom
        );
    }
    if let Some(q) = &result.structure {
        println!(
            "{}: 살대 {} x {} mm, {}개",
            q.structure_type.label(),
            q.slats_width,
            q.slats_length,
            q.slats_count
        );
        if let Some(blocks) = q.total_blocks {
            println!("총 블록 수: {blocks}");
        }
        if let Some(w) = q.gap_width {
            println!("공간 폭: {w:.1} mm");
        }
        if let Some(l) = q.gap_length {
            println!("공간 길이: {l:.1} mm");
        }
        if let (Some(up), Some(bottom)) = (q.gap_length_upper, q.gap_length_bottom) {
            println!("공간 길이: 상부 {up:.1} mm, 하부 {bottom:.1} mm");
        }
    }

    println!("\n{:<24} {:>6} {:>8} {:>6} {:>6} {:>8}", "부재", "폭", "길이", "개/문", "총개수", "원목");
    for piece in &result.pieces {
        println!(
            "{:<24} {:>6} {:>8} {:>6} {:>6} {:>8}",
            piece.kind.label(),
            piece.width,
            piece.length,
            piece.count_per_door,
            or_dash(piece.total_count(result.num_doors)),
            or_dash(piece.bars(result.num_doors))
        );
    }
    println!(
        "\n도어 {}개 총 목재 길이: {} mm, 필요 원목: {}본",
        result.num_doors, result.total_wood_length, result.total_wood_bars
    );
    for warning in &result.warnings {
        println!("경고: {warning}");
    }
}

fn or_dash(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// 엣지 실링 마감 목록을 출력한다.
pub fn print_finishes() {
    println!("\n-- 엣지 실링 --");
    for f in finishes() {
        println!(
            "{:<20} {:<24} 두께 {:>4} mm, 프레임 +{}, 락 높이 +{}",
            f.code, f.label, f.thickness_mm, f.frame_adjustment, f.lock_height_adjustment
        );
    }
}

/// 카탈로그 목록을 출력한다.
pub fn print_catalog<S: CatalogStore>(kind: HardwareKind, store: &S) {
    let entries = store.list(kind);
    println!("\n-- {kind} 카탈로그 ({}건) --", entries.len());
    for (name, record) in entries {
        match record {
            HardwareRecord::Lock(r) => println!(
                "{name}: 길이 {} mm, 하단 오프셋 {} mm, 상단 오프셋 {} mm",
                r.length, r.offset_bottom, r.offset_top
            ),
            HardwareRecord::Closer(r) => println!("{name}: 길이 {} mm", r.length),
        }
    }
}

/// 카탈로그 관리 메뉴를 처리한다.
pub fn handle_catalog<S: CatalogStore>(kind: HardwareKind, store: &mut S) -> Result<(), AppError> {
    print_catalog(kind, store);
    println!("1) 추가/수정  2) 삭제  (엔터: 돌아가기)");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let name = read_line("이름: ")?;
            let length = read_i64("길이 [mm]: ")?;
            let record = if kind.is_lock() {
                let offset_bottom = read_i64("하단 오프셋 [mm]: ")?;
                HardwareRecord::Lock(LockRecord::new(length, offset_bottom))
            } else {
                HardwareRecord::Closer(CloserRecord { length })
            };
            match store.put(kind, &name, record) {
                Ok(_) => println!("'{}' 저장됨", name.trim()),
                Err(err) => println!("{err}"),
            }
        }
        "2" => {
            let name = read_line("삭제할 이름: ")?;
            match store.remove(kind, &name)? {
                Some(_) => println!("'{}' 삭제됨", name.trim()),
                None => println!("'{}' 은(는) 없습니다.", name.trim()),
            }
        }
        "" => {}
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("카탈로그 디렉터리: {}", cfg.catalog_dir.display());
    println!("기본 엣지 실링: {}", cfg.defaults.edge_sealing.code());
    let sel = read_line("새 기본 엣지 실링 코드 (취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match find_finish(&sel) {
        Some(f) => {
            cfg.defaults.edge_sealing = f.sealing;
            println!("기본 엣지 실링이 {} 로 설정되었습니다.", f.code);
        }
        None => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn read_choice(title: &str, options: &[(&'static str, &'static str)]) -> Result<&'static str, AppError> {
    println!("{title}:");
    for (i, (code, label)) in options.iter().enumerate() {
        println!("  {}) {label} ({code})", i + 1);
    }
    loop {
        let sel = read_line("선택: ")?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if let Some((code, _)) = n.checked_sub(1).and_then(|i| options.get(i)) {
                return Ok(*code);
            }
        }
        println!("잘못된 입력입니다. 다시 선택하세요.");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 0바이트를 읽으면 `UnexpectedEof`로 돌려 재입력 루프가 멈추게 한다.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "입력이 끝났습니다",
        )));
    }
    Ok(buf)
}

fn read_default(prompt: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{prompt} [{default}]: "))?;
    if s.trim().is_empty() {
        Ok(default.to_string())
    } else {
        Ok(s)
    }
}

fn read_i64(prompt: &str) -> Result<i64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<i64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
