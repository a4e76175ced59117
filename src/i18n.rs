use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_POWER_CALC: &str = "main_menu.power_calc";
    pub const MAIN_MENU_DISCHARGE_SIM: &str = "main_menu.discharge_sim";
    pub const MAIN_MENU_CIVIL_WORK: &str = "main_menu.civil_work";
    pub const MAIN_MENU_TURBINE: &str = "main_menu.turbine";
    pub const MAIN_MENU_STATION_PLAN: &str = "main_menu.station_plan";
    pub const MAIN_MENU_SITE_SELECTION: &str = "main_menu.site_selection";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const POWER_CALC_HEADING: &str = "power_calc.heading";
    pub const POWER_CALC_NOTE: &str = "power_calc.note";
    pub const PROMPT_DISCHARGE: &str = "prompt.discharge";
    pub const PROMPT_HIGH_WATER_LEVEL: &str = "prompt.high_water_level";
    pub const PROMPT_LOW_WATER_LEVEL: &str = "prompt.low_water_level";
    pub const PROMPT_TAILWATER_LEVEL: &str = "prompt.tailwater_level";
    pub const PROMPT_PENSTOCK_LENGTH: &str = "prompt.penstock_length";
    pub const PROMPT_ROUGHNESS: &str = "prompt.roughness";
    pub const PROMPT_FLOW_VELOCITY: &str = "prompt.flow_velocity";
    pub const PROMPT_VISCOSITY: &str = "prompt.viscosity";
    pub const PROMPT_EFFICIENCY: &str = "prompt.efficiency";
    pub const PROMPT_OPERATING_TIME: &str = "prompt.operating_time";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_DIAMETER: &str = "result.diameter";
    pub const RESULT_GROSS_HEAD: &str = "result.gross_head";
    pub const RESULT_DRAFT_HEAD: &str = "result.draft_head";
    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_FRICTION: &str = "result.friction";
    pub const RESULT_MAJOR_LOSS: &str = "result.major_loss";
    pub const RESULT_EFFECTIVE_HEAD: &str = "result.effective_head";
    pub const RESULT_POWER: &str = "result.power";
    pub const RESULT_ENERGY: &str = "result.energy";
    pub const RESULT_INFEASIBLE_WARNING: &str = "result.infeasible_warning";

    pub const CURVE_DIAMETER_HEADING: &str = "curve.diameter_heading";
    pub const CURVE_ENERGY_HEADING: &str = "curve.energy_heading";

    pub const STUB_DISCHARGE_SIM: &str = "stub.discharge_sim";
    pub const STUB_CIVIL_WORK: &str = "stub.civil_work";
    pub const STUB_TURBINE: &str = "stub.turbine";
    pub const STUB_STATION_PLAN: &str = "stub.station_plan";
    pub const STUB_SITE_SELECTION: &str = "stub.site_selection";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어 → 내장 한국어 순으로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)).to_string(),
            Language::Ko => ko(key).to_string(),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Hydropower Design Toolbox ===",
        MAIN_MENU_POWER_CALC => "1) 출력 계산",
        MAIN_MENU_DISCHARGE_SIM => "2) 유량 시뮬레이션",
        MAIN_MENU_CIVIL_WORK => "3) 토목 설계",
        MAIN_MENU_TURBINE => "4) 수차",
        MAIN_MENU_STATION_PLAN => "5) 발전소 배치 계획",
        MAIN_MENU_SITE_SELECTION => "6) 부지 선정",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        POWER_CALC_HEADING => "\n-- 출력 계산 --",
        POWER_CALC_NOTE => "참고: 엔터만 입력하면 괄호 안의 기본값을 사용합니다.",
        PROMPT_DISCHARGE => "발전 사용수량 Q [m3/s]",
        PROMPT_HIGH_WATER_LEVEL => "고수위 HWL [m]",
        PROMPT_LOW_WATER_LEVEL => "저수위 LWL [m]",
        PROMPT_TAILWATER_LEVEL => "방수위 TWL [m]",
        PROMPT_PENSTOCK_LENGTH => "수압관로 길이 L [m]",
        PROMPT_ROUGHNESS => "절대 조도 k [m]",
        PROMPT_FLOW_VELOCITY => "관내 유속 u [m/s]",
        PROMPT_VISCOSITY => "동점성계수 ν [m2/s]",
        PROMPT_EFFICIENCY => "종합 효율 η [0~1]",
        PROMPT_OPERATING_TIME => "일일 운전 시간 T [h]",
        RESULT_HEADING => "\n-- 계산 결과 --",
        RESULT_DIAMETER => "수리 직경:",
        RESULT_GROSS_HEAD => "총낙차:",
        RESULT_DRAFT_HEAD => "흡출 수두:",
        RESULT_REYNOLDS => "레이놀즈수:",
        RESULT_FRICTION => "마찰계수:",
        RESULT_MAJOR_LOSS => "마찰손실:",
        RESULT_EFFECTIVE_HEAD => "유효낙차:",
        RESULT_POWER => "출력:",
        RESULT_ENERGY => "에너지:",
        RESULT_INFEASIBLE_WARNING => "경고: 유효낙차가 음수입니다. 설계가 성립하지 않습니다.",
        CURVE_DIAMETER_HEADING => "\n-- 유량-직경 곡선 (10~150 m3/s) --",
        CURVE_ENERGY_HEADING => "\n-- 운전시간-에너지 곡선 (0~48 h) --",
        STUB_DISCHARGE_SIM => "유량 시뮬레이션 섹션입니다. 시간/조건별 방류량 모의가 들어갈 자리입니다.",
        STUB_CIVIL_WORK => "토목 설계 섹션입니다. 터널/수압관로/구조물 설계 도구가 들어갈 자리입니다.",
        STUB_TURBINE => "수차 섹션입니다. 수차 선정/사이징/효율 계산이 들어갈 자리입니다.",
        STUB_STATION_PLAN => "발전소 배치 계획 섹션입니다. 배치 계획 도구가 들어갈 자리입니다.",
        STUB_SITE_SELECTION => "부지 선정 섹션입니다. 자료 기반 부지 평가 도구가 들어갈 자리입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Hydropower Design Toolbox ===",
        MAIN_MENU_POWER_CALC => "1) Power Calculation",
        MAIN_MENU_DISCHARGE_SIM => "2) Discharge Simulation",
        MAIN_MENU_CIVIL_WORK => "3) Civil Work Design",
        MAIN_MENU_TURBINE => "4) Turbine",
        MAIN_MENU_STATION_PLAN => "5) Power Station Plan",
        MAIN_MENU_SITE_SELECTION => "6) Site Selection",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        POWER_CALC_HEADING => "\n-- Power Calculation --",
        POWER_CALC_NOTE => "Note: press enter to accept the default in parentheses.",
        PROMPT_DISCHARGE => "Design discharge Q [m3/s]",
        PROMPT_HIGH_WATER_LEVEL => "High water level HWL [m]",
        PROMPT_LOW_WATER_LEVEL => "Low water level LWL [m]",
        PROMPT_TAILWATER_LEVEL => "Tailwater level TWL [m]",
        PROMPT_PENSTOCK_LENGTH => "Penstock length L [m]",
        PROMPT_ROUGHNESS => "Absolute roughness k [m]",
        PROMPT_FLOW_VELOCITY => "Flow velocity u [m/s]",
        PROMPT_VISCOSITY => "Kinematic viscosity ν [m2/s]",
        PROMPT_EFFICIENCY => "Overall efficiency η [0~1]",
        PROMPT_OPERATING_TIME => "Daily operating time T [h]",
        RESULT_HEADING => "\n-- Computation Result --",
        RESULT_DIAMETER => "Hydraulic diameter:",
        RESULT_GROSS_HEAD => "Gross head:",
        RESULT_DRAFT_HEAD => "Draft head:",
        RESULT_REYNOLDS => "Reynolds number:",
        RESULT_FRICTION => "Friction factor:",
        RESULT_MAJOR_LOSS => "Major loss:",
        RESULT_EFFECTIVE_HEAD => "Effective head:",
        RESULT_POWER => "Power:",
        RESULT_ENERGY => "Energy:",
        RESULT_INFEASIBLE_WARNING => "Warning: effective head is negative; the design is infeasible.",
        CURVE_DIAMETER_HEADING => "\n-- Discharge-diameter curve (10~150 m3/s) --",
        CURVE_ENERGY_HEADING => "\n-- Time-energy curve (0~48 h) --",
        STUB_DISCHARGE_SIM => "Discharge Simulation: will simulate water discharge over time or under different conditions.",
        STUB_CIVIL_WORK => "Civil Work Design: will provide tools for designing tunnels, penstocks, and structural components.",
        STUB_TURBINE => "Turbine: will include turbine selection, sizing, and efficiency calculations.",
        STUB_STATION_PLAN => "Power Station Plan: will provide layout planning tools for a hydropower station.",
        STUB_SITE_SELECTION => "Site Selection: will include tools for evaluating and selecting optimal hydropower sites.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}
