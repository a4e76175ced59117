#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use egui_plot::{Legend, Line, Plot, PlotPoints};
use hydropower_design_toolbox::{
    config, conversion,
    hydro::curve::{sample_diameter_curve, sample_energy_curve, SampleDomain},
    hydro::performance::{compute, ComputationResult, DesignParameterSet, PerformanceError},
    i18n,
    quantity::QuantityKind,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Hydropower Design Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 상단 배너 이미지를 찾아 텍스처로 올린다. 없으면 배너 없이 동작한다.
fn load_banner(ctx: &egui::Context) -> Option<egui::TextureHandle> {
    let search = ["banner.png", "assets/banner.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    let color_image =
        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw());
    Some(ctx.load_texture("banner", color_image, egui::TextureOptions::LINEAR))
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 시스템 폰트를 탐색해 적용한다.
/// 1) assets/fonts/ 아래의 프로젝트 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 3) Linux 시스템 폰트(나눔고딕/Noto CJK)
/// 모두 실패하면 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_candidates = ["assets/fonts/NanumGothic.ttf", "assets/fonts/malgun.ttf"];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "malgunbd.ttf", "gulim.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let linux_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 두 스윕 곡선을 CSV 텍스트로 만든다.
fn format_curves_csv(diameter: &[[f64; 2]], energy: &[[f64; 2]]) -> String {
    let mut out = String::from("discharge_m3_per_s,hydraulic_diameter_m\n");
    for p in diameter {
        out.push_str(&format!("{:.6},{:.6}\n", p[0], p[1]));
    }
    out.push_str("operating_time_h,energy_kwh\n");
    for p in energy {
        out.push_str(&format!("{:.6},{:.6}\n", p[0], p[1]));
    }
    out
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    PowerCalculation,
    DischargeSimulation,
    CivilWorkDesign,
    Turbine,
    PowerStationPlan,
    SiteSelection,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    section: Section,
    window_alpha: f32,
    ui_scale: f32,
    always_on_top: bool,
    apply_initial_view_size: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    banner: Option<egui::TextureHandle>,
    banner_tried: bool,
    // 출력 계산
    params: DesignParameterSet,
    result: Option<Result<ComputationResult, PerformanceError>>,
    diameter_curve: Vec<[f64; 2]>,
    energy_curve: Vec<[f64; 2]>,
    power_unit: String,
    energy_unit: String,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let params = config.design.clone();
        let mut s = Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            lang_input,
            lang_save_status: None,
            section: Section::PowerCalculation,
            ui_scale: 1.0,
            always_on_top: false,
            apply_initial_view_size: true,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
            banner: None,
            banner_tried: false,
            params,
            result: None,
            diameter_curve: Vec::new(),
            energy_curve: Vec::new(),
            power_unit: "kW".into(),
            energy_unit: "kWh".into(),
            export_status: None,
        };
        s.apply_unit_preset(s.config.unit_system);
        s.recompute();
        s
    }

    /// 입력 변경마다 전체 체인을 다시 계산한다. 오류면 차트도 비워서
    /// 부분 결과를 보여주지 않는다.
    fn recompute(&mut self) {
        let result = compute(&self.params);
        match &result {
            Ok(r) => {
                self.diameter_curve = match sample_diameter_curve(SampleDomain::discharge_default())
                {
                    Ok(curve) => curve.map(|(x, y)| [x, y]).collect(),
                    Err(_) => Vec::new(),
                };
                self.energy_curve =
                    sample_energy_curve(r.power_kw, SampleDomain::operating_time_default())
                        .map(|(x, y)| [x, y])
                        .collect();
            }
            Err(_) => {
                self.diameter_curve.clear();
                self.energy_curve.clear();
            }
        }
        self.result = Some(result);
    }

    /// 단위 시스템 프리셋을 표시 단위에 반영한다.
    fn apply_unit_preset(&mut self, system: config::UnitSystem) {
        self.config.default_units = config::DefaultUnits::for_system(system);
        match system {
            config::UnitSystem::SI => {
                self.power_unit = "kW".into();
                self.energy_unit = "kWh".into();
            }
            config::UnitSystem::Imperial => {
                self.power_unit = "hp".into();
                self.energy_unit = "kWh".into();
            }
        }
    }

    /// 기준 단위 값을 표시 단위로 환산해 문자열로 만든다.
    fn display_converted(
        &self,
        kind: QuantityKind,
        value_base: f64,
        base_code: &str,
        out_code: &str,
    ) -> String {
        match conversion::convert(kind, value_base, base_code, out_code) {
            Ok(v) => format!("{v:.2} {out_code}"),
            Err(e) => format!("- ({e})"),
        }
    }

    fn export_curves_csv(&mut self) {
        let txt = |key: &str, default: &str| {
            self.tr
                .lookup(key)
                .unwrap_or_else(|| default.to_string())
        };
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("hydropower_curves.csv")
            .save_file()
        else {
            return;
        };
        let csv = format_curves_csv(&self.diameter_curve, &self.energy_curve);
        self.export_status = Some(match fs::write(&path, csv) {
            Ok(()) => txt("gui.power.export_done", "Curves exported."),
            Err(e) => format!("{}: {e}", txt("gui.power.export_error", "Export failed")),
        });
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (section, label) in [
            (
                Section::PowerCalculation,
                txt("gui.tab.power_calc", "Power Calculation"),
            ),
            (
                Section::DischargeSimulation,
                txt("gui.tab.discharge_sim", "Discharge Simulation"),
            ),
            (
                Section::CivilWorkDesign,
                txt("gui.tab.civil_work", "Civil Work Design"),
            ),
            (Section::Turbine, txt("gui.tab.turbine", "Turbine")),
            (
                Section::PowerStationPlan,
                txt("gui.tab.station_plan", "Power Station Plan"),
            ),
            (
                Section::SiteSelection,
                txt("gui.tab.site_selection", "Site Selection"),
            ),
        ] {
            let selected = self.section == section;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch section"));
            if resp.clicked() {
                self.section = section;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_power_calculation(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.power.heading", "Power Calculation"),
            &txt(
                "gui.power.tip",
                "Derive head losses, effective head, power and energy from the design inputs.",
            ),
        );
        ui.add_space(8.0);

        let mut changed = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            label_with_tip(
                ui,
                &txt("gui.power.inputs_label", "Design inputs"),
                &txt(
                    "gui.power.tip",
                    "Derive head losses, effective head, power and energy from the design inputs.",
                ),
            );
            egui::Grid::new("power_inputs")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let rows: [(&str, &str, &mut f64, f64); 9] = [
                        (
                            "gui.power.discharge",
                            "Discharge Q [m3/s]",
                            &mut self.params.discharge_m3_per_s,
                            0.5,
                        ),
                        (
                            "gui.power.hwl",
                            "High water level HWL [m]",
                            &mut self.params.high_water_level_m,
                            1.0,
                        ),
                        (
                            "gui.power.lwl",
                            "Low water level LWL [m]",
                            &mut self.params.low_water_level_m,
                            1.0,
                        ),
                        (
                            "gui.power.twl",
                            "Tailwater level TWL [m]",
                            &mut self.params.tailwater_level_m,
                            1.0,
                        ),
                        (
                            "gui.power.length",
                            "Penstock length L [m]",
                            &mut self.params.penstock_length_m,
                            1.0,
                        ),
                        (
                            "gui.power.roughness",
                            "Roughness k [m]",
                            &mut self.params.roughness_m,
                            0.0001,
                        ),
                        (
                            "gui.power.velocity",
                            "Flow velocity u [m/s]",
                            &mut self.params.flow_velocity_m_per_s,
                            0.1,
                        ),
                        (
                            "gui.power.viscosity",
                            "Kinematic viscosity ν [m2/s]",
                            &mut self.params.kinematic_viscosity_m2_per_s,
                            1.0e-7,
                        ),
                        (
                            "gui.power.time",
                            "Operating time T [h]",
                            &mut self.params.operating_time_h,
                            0.5,
                        ),
                    ];
                    for (key, default, value, speed) in rows {
                        ui.label(txt(key, default));
                        if ui.add(egui::DragValue::new(value).speed(speed)).changed() {
                            changed = true;
                        }
                        ui.end_row();
                    }

                    ui.label(txt("gui.power.efficiency", "Efficiency η"));
                    if ui
                        .add(egui::Slider::new(&mut self.params.efficiency, 0.0..=1.0))
                        .changed()
                    {
                        changed = true;
                    }
                    ui.end_row();
                });
        });
        if changed {
            self.recompute();
        }

        ui.add_space(8.0);
        match self.result.clone() {
            Some(Ok(result)) => {
                self.ui_metrics(ui, &result);
                ui.add_space(8.0);
                self.ui_charts(ui);
            }
            Some(Err(e)) => {
                // 오류 시 메트릭/차트를 내지 않는다.
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("{}: {e}", txt("general.error_prefix", "Error")),
                );
            }
            None => {}
        }
    }

    fn ui_metrics(&mut self, ui: &mut egui::Ui, result: &ComputationResult) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(txt("gui.power.metrics", "Derived quantities"));
            egui::Grid::new("power_metrics")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.power.diameter", "Hydraulic diameter"));
                    ui.label(format!("{:.4} m", result.hydraulic_diameter_m));
                    ui.end_row();
                    ui.label(txt("gui.power.gross_head", "Gross head"));
                    ui.label(format!("{:.2} m", result.gross_head_m));
                    ui.end_row();
                    ui.label(txt("gui.power.draft_head", "Draft head"));
                    ui.label(format!("{:.2} m", result.draft_head_m));
                    ui.end_row();
                    ui.label(txt("gui.power.reynolds", "Reynolds number"));
                    ui.label(format!("{:.3e}", result.reynolds_number));
                    ui.end_row();
                    ui.label(txt("gui.power.friction", "Friction factor"));
                    ui.label(format!("{:.5}", result.friction_factor));
                    ui.end_row();
                    ui.label(txt("gui.power.major_loss", "Major loss"));
                    ui.label(format!("{:.3} m", result.major_loss_m));
                    ui.end_row();
                    ui.label(txt("gui.power.effective_head", "Effective head"));
                    ui.label(format!("{:.2} m", result.effective_head_m));
                    ui.end_row();

                    ui.label(txt("gui.power.power", "Power"));
                    ui.horizontal(|ui| {
                        ui.label(self.display_converted(
                            QuantityKind::Power,
                            result.power_kw,
                            "kw",
                            &self.power_unit,
                        ));
                        egui::ComboBox::from_id_source("power_unit")
                            .selected_text(self.power_unit.clone())
                            .show_ui(ui, |ui| {
                                for code in ["kW", "MW", "W", "hp"] {
                                    ui.selectable_value(
                                        &mut self.power_unit,
                                        code.to_string(),
                                        code,
                                    );
                                }
                            });
                    });
                    ui.end_row();

                    ui.label(txt("gui.power.energy", "Energy"));
                    ui.horizontal(|ui| {
                        ui.label(self.display_converted(
                            QuantityKind::Energy,
                            result.energy_kwh,
                            "kwh",
                            &self.energy_unit,
                        ));
                        egui::ComboBox::from_id_source("energy_unit")
                            .selected_text(self.energy_unit.clone())
                            .show_ui(ui, |ui| {
                                for code in ["kWh", "MWh", "J", "GJ"] {
                                    ui.selectable_value(
                                        &mut self.energy_unit,
                                        code.to_string(),
                                        code,
                                    );
                                }
                            });
                    });
                    ui.end_row();
                });
            if result.effective_head_m < 0.0 {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    txt(
                        "gui.power.infeasible",
                        "Effective head is negative; the design is infeasible.",
                    ),
                );
            }
        });
    }

    fn ui_charts(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.label(txt("gui.chart.diameter_title", "Hydraulic diameter vs discharge"));
        Plot::new("diameter_curve")
            .height(220.0)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(self.diameter_curve.clone()))
                        .name(txt("gui.chart.diameter_series", "d_h [m]")),
                );
            });

        ui.add_space(8.0);
        ui.label(txt("gui.chart.energy_title", "Energy vs operating time"));
        Plot::new("energy_curve")
            .height(220.0)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(self.energy_curve.clone()))
                        .name(txt("gui.chart.energy_series", "E [kWh]")),
                );
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .button(txt("gui.power.export_csv", "Export curves (CSV)"))
                .clicked()
            {
                self.export_curves_csv();
            }
            if let Some(status) = &self.export_status {
                ui.label(status);
            }
        });
    }

    /// 자리만 잡아 둔 섹션: 제목과 안내 문구만 표시한다.
    fn ui_placeholder(&mut self, ui: &mut egui::Ui, title_key: &str, body_key: &str) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt(title_key, "Section"));
        ui.add_space(8.0);
        ui.label(self.tr.t(body_key));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target =
                    egui::vec2((screen.x * 0.60).max(1000.0), (screen.y * 0.60).max(700.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        if !self.banner_tried {
            self.banner = load_banner(ctx);
            self.banner_tried = true;
        }

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Hydropower Design Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui
                    .button(txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_unit_system = self.config.unit_system;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                    ui.horizontal(|ui| {
                        for (label, us) in [
                            ("SI", config::UnitSystem::SI),
                            ("Imperial", config::UnitSystem::Imperial),
                        ] {
                            ui.selectable_value(&mut new_unit_system, us, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider =
                        egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("Font (.ttf/.ttc)");
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button("...").clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button("Load").clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(ui.visuals().error_fg_color, err);
                    }

                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(
                            &self.config.language,
                            Some(self.config.language.as_str()),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if new_unit_system != self.config.unit_system {
                self.config.unit_system = new_unit_system;
                self.apply_unit_preset(new_unit_system);
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline calculator for hydropower plant sizing",
                    ));
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust units/font in settings if you see issues.",
                    ));
                });
        }

        // 공식 참조 모달
        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt(
                        "gui.formula.diameter",
                        "Hydraulic diameter: d = 1.2·ln(Q) + 1.5 (empirical fit).",
                    ));
                    ui.label(txt(
                        "gui.formula.head",
                        "Heads: NWL = (2/3)·HWL + (1/3)·LWL; h_gross = NWL − TWL; draft head from quadratic fit; h_eff = h_gross − h_loss − h_draft.",
                    ));
                    ui.separator();
                    ui.label(txt(
                        "gui.formula.friction",
                        "Friction factor: laminar f = 64/Re; turbulent Colebrook-White fixed point, 100 iterations.",
                    ));
                    ui.label(txt(
                        "gui.formula.loss",
                        "Major loss: h = f·(L/D)·(u²/2g)·(ρ_fluid/ρ_water).",
                    ));
                    ui.separator();
                    ui.label(txt(
                        "gui.formula.power",
                        "Power: P = Q·h_eff·g·η [kW]; Energy: E = P·T [kWh].",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if let Some(banner) = &self.banner {
                        ui.add(
                            egui::Image::from_texture(banner)
                                .max_height(160.0)
                                .max_width(ui.available_width()),
                        );
                        ui.add_space(8.0);
                    }
                    match self.section {
                        Section::PowerCalculation => self.ui_power_calculation(ui),
                        Section::DischargeSimulation => self.ui_placeholder(
                            ui,
                            "gui.tab.discharge_sim",
                            i18n::keys::STUB_DISCHARGE_SIM,
                        ),
                        Section::CivilWorkDesign => self.ui_placeholder(
                            ui,
                            "gui.tab.civil_work",
                            i18n::keys::STUB_CIVIL_WORK,
                        ),
                        Section::Turbine => {
                            self.ui_placeholder(ui, "gui.tab.turbine", i18n::keys::STUB_TURBINE)
                        }
                        Section::PowerStationPlan => self.ui_placeholder(
                            ui,
                            "gui.tab.station_plan",
                            i18n::keys::STUB_STATION_PLAN,
                        ),
                        Section::SiteSelection => self.ui_placeholder(
                            ui,
                            "gui.tab.site_selection",
                            i18n::keys::STUB_SITE_SELECTION,
                        ),
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_computes_defaults_and_curves() {
        let app = GuiApp::new(config::Config::default());
        match &app.result {
            Some(Ok(r)) => assert!(r.power_kw > 0.0),
            other => panic!("expected Ok result, got {other:?}"),
        }
        assert_eq!(app.diameter_curve.len(), 100);
        assert_eq!(app.energy_curve.len(), 100);
    }

    #[test]
    fn invalid_efficiency_withholds_curves() {
        let mut app = GuiApp::new(config::Config::default());
        app.params.efficiency = 1.5;
        app.recompute();
        assert!(matches!(app.result, Some(Err(_))));
        assert!(app.diameter_curve.is_empty());
        assert!(app.energy_curve.is_empty());
    }

    #[test]
    fn preset_imperial_applies_imperial_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::Imperial);
        assert_eq!(app.power_unit, "hp");
        assert_eq!(
            app.config.default_units.length,
            hydropower_design_toolbox::units::LengthUnit::Foot
        );
    }

    #[test]
    fn curves_csv_has_both_sections() {
        let csv = format_curves_csv(&[[10.0, 4.26]], &[[24.0, 436793.7]]);
        assert!(csv.starts_with("discharge_m3_per_s,hydraulic_diameter_m\n"));
        assert!(csv.contains("operating_time_h,energy_kwh\n"));
        assert!(csv.contains("10.000000,4.260000"));
    }

    #[test]
    fn power_display_uses_selected_unit() {
        let app = GuiApp::new(config::Config::default());
        let text = app.display_converted(QuantityKind::Power, 1000.0, "kw", "MW");
        assert_eq!(text, "1.00 MW");
    }
}
