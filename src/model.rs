//! The live settings instance and the typed accessor over it.
//!
//! Group structs mirror the conceptual sections of the schema; the accessor
//! pair [`Settings::value`] / [`Settings::set_value`] is the only path the
//! rest of the crate uses to touch descriptor-backed fields.

use std::ops::{Index, IndexMut};

use crate::schema::{self, FieldId, ScriptKind};
use crate::value::SettingValue;

/// Raft phase kinds; each phase repeats the same set of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaftPhase {
    Base,
    Interface,
}

impl RaftPhase {
    pub const ALL: [RaftPhase; 2] = [RaftPhase::Base, RaftPhase::Interface];
}

/// Per-phase raft parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RaftPhaseSettings {
    pub layer_count: i32,
    pub material_distance_ratio: f64,
    pub rotation: f64,
    pub rotation_per_layer: f64,
    pub distance: f64,
    pub thickness: f64,
    pub temperature: f64,
}

/// Raft parameters: overall size plus one group per phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RaftSettings {
    pub size: f64,
    pub phases: [RaftPhaseSettings; 2],
}

impl Index<RaftPhase> for RaftSettings {
    type Output = RaftPhaseSettings;

    fn index(&self, phase: RaftPhase) -> &RaftPhaseSettings {
        &self.phases[phase as usize]
    }
}

impl IndexMut<RaftPhase> for RaftSettings {
    fn index_mut(&mut self, phase: RaftPhase) -> &mut RaftPhaseSettings {
        &mut self.phases[phase as usize]
    }
}

/// Printer hardware parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HardwareSettings {
    pub min_print_speed_xy: f64,
    pub max_print_speed_xy: f64,
    pub min_print_speed_z: f64,
    pub max_print_speed_z: f64,
    pub distance_to_reach_full_speed: f64,
    pub extrusion_factor: f64,
    pub layer_thickness: f64,
    pub downstream_multiplier: f64,
    pub downstream_extrusion_multiplier: f64,
    pub extruded_material_width: f64,
    pub port_name: String,
    pub serial_speed: i32,
    pub validate_connection: bool,
    pub keep_lines: i32,
    pub receiving_buffer_size: i32,
    /// Build volume in mm; defaults only, not persisted or bound.
    pub volume: [f64; 3],
    /// Print margin in mm; defaults only, not persisted or bound.
    pub print_margin: [f64; 3],
}

/// Legacy shrink-quality mode, persisted as two boolean keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShrinkQuality {
    #[default]
    Fast,
    Precise,
}

/// Slicing parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlicingSettings {
    pub use_incremental_ecode: bool,
    pub use_3d_gcode: bool,
    pub enable_antiooze: bool,
    pub antiooze_distance: f64,
    pub antiooze_speed: f64,
    pub infill_distance: f64,
    pub infill_rotation: f64,
    pub infill_rotation_per_layer: f64,
    pub alt_infill_distance: f64,
    pub alt_infill_layers_text: String,
    pub shell_only: bool,
    pub shell_count: i32,
    pub enable_acceleration: bool,
    pub optimization: f64,
    pub shrink_quality: ShrinkQuality,
}

impl SlicingSettings {
    /// Resolve the alternate-infill layer list against the current model's
    /// layer count. Recomputed on every call; the count changes with the
    /// loaded geometry.
    pub fn alt_infill_layers(&self, layer_count: u32) -> Vec<i32> {
        alt_infill_layers(&self.alt_infill_layers_text, layer_count)
    }
}

/// Miscellaneous host flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MiscSettings {
    pub file_logging_enabled: bool,
    pub temp_reading_enabled: bool,
    pub clear_logfiles_when_print_starts: bool,
}

/// Render and preview parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplaySettings {
    pub display_gcode: bool,
    pub gcode_draw_start: f64,
    pub gcode_draw_end: f64,
    pub display_endpoints: bool,
    pub display_normals: bool,
    pub display_bbox: bool,
    pub display_wireframe: bool,
    pub display_wireframe_shaded: bool,
    pub display_polygons: bool,
    pub display_all_layers: bool,
    pub display_infill: bool,
    pub display_debug_infill: bool,
    pub display_debug: bool,
    pub display_cutting_plane: bool,
    pub draw_vertex_numbers: bool,
    pub draw_line_numbers: bool,
    pub draw_outline_numbers: bool,
    pub draw_cp_vertex_numbers: bool,
    pub draw_cp_line_numbers: bool,
    pub draw_cp_outline_numbers: bool,
    pub cutting_plane_value: f64,
    pub polygon_opacity: f64,
    pub luminance_shows_speed: bool,
    pub highlight: f64,
    pub normals_length: f64,
    pub end_point_size: f64,
    pub temp_update_speed: f64,
    /// HSV triples; defaults only, not persisted or bound.
    pub polygon_hsv: [f64; 3],
    pub wireframe_hsv: [f64; 3],
    pub normals_hsv: [f64; 3],
    pub endpoints_hsv: [f64; 3],
    pub gcode_extrude_hsv: [f64; 3],
    pub gcode_move_hsv: [f64; 3],
}

/// The three free-form G-code script slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GcodeScripts {
    pub start: String,
    pub layer: String,
    pub end: String,
}

/// One settings instance per application session.
///
/// `Settings::default()` yields a fully-defaulted instance; no field is ever
/// left uninitialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub raft: RaftSettings,
    pub hardware: HardwareSettings,
    pub slicing: SlicingSettings,
    pub misc: MiscSettings,
    pub display: DisplaySettings,
    pub gcode: GcodeScripts,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            raft: RaftSettings::default(),
            hardware: HardwareSettings::default(),
            slicing: SlicingSettings::default(),
            misc: MiscSettings::default(),
            display: DisplaySettings::default(),
            gcode: GcodeScripts::default(),
        };
        settings.apply_defaults();
        settings
    }
}

const DEFAULT_START_SCRIPT: &str = "; default start script\n\
G21             ; metric is good!\n\
G90             ; absolute positioning\n\
T0              ; select new extruder\n\
G28             ; go home\n\
G92 E0          ; set extruder home\n\
M104 S200.0     ; set temperature to 200.0\n\
G1 X20 Y20 F500 ; move away from 0.0, to use the same reset for each layer\n\n";

const DEFAULT_END_SCRIPT: &str = "G1 X0 Y0 F2000.0 ; feed for start of next move\n\
M104 S0.0        ; heater off\n";

impl Settings {
    /// Write every field's default, schema-backed and special alike.
    ///
    /// Idempotent; also runs before every load so that documents missing
    /// keys still produce a fully-defined instance.
    pub fn apply_defaults(&mut self) {
        for descriptor in schema::descriptors() {
            self.set_value(descriptor.id, descriptor.default.to_value());
        }

        self.slicing.shrink_quality = ShrinkQuality::Fast;

        self.gcode.start = String::from(DEFAULT_START_SCRIPT);
        self.gcode.layer = String::new();
        self.gcode.end = String::from(DEFAULT_END_SCRIPT);

        self.display.polygon_hsv = [0.54, 1.0, 0.5];
        self.display.wireframe_hsv = [0.08, 1.0, 1.0];
        self.display.normals_hsv = [0.23, 1.0, 1.0];
        self.display.endpoints_hsv = [0.45, 1.0, 1.0];
        self.display.gcode_extrude_hsv = [1.0, 1.0, 0.18];
        self.display.gcode_move_hsv = [1.0, 0.95, 1.0];

        self.hardware.volume = [200.0, 200.0, 140.0];
        self.hardware.print_margin = [10.0, 10.0, 0.0];
    }

    /// Read one descriptor-backed field.
    pub fn value(&self, id: FieldId) -> SettingValue {
        field_value(self, id)
    }

    /// Write one descriptor-backed field.
    ///
    /// Panics when the value's tag does not match the field's type tag:
    /// schema and accessor are defined together, so a mismatch is a defect
    /// in this crate rather than a runtime condition.
    pub fn set_value(&mut self, id: FieldId, value: SettingValue) {
        set_field_value(self, id, value);
    }

    /// Read one G-code script.
    pub fn script(&self, kind: ScriptKind) -> &str {
        match kind {
            ScriptKind::Start => &self.gcode.start,
            ScriptKind::Layer => &self.gcode.layer,
            ScriptKind::End => &self.gcode.end,
        }
    }

    /// Replace one G-code script.
    pub fn set_script(&mut self, kind: ScriptKind, text: String) {
        match kind {
            ScriptKind::Start => self.gcode.start = text,
            ScriptKind::Layer => self.gcode.layer = text,
            ScriptKind::End => self.gcode.end = text,
        }
    }
}

/// Parse a free-text layer list into ordered layer indices.
///
/// Tokens are comma-separated integers; unparsable tokens are dropped
/// without a diagnostic, and negative entries count from the end
/// (`-1` is the last layer).
pub fn alt_infill_layers(text: &str, layer_count: u32) -> Vec<i32> {
    let mut layers = Vec::new();
    for token in text.split(',') {
        let Ok(parsed) = token.trim().parse::<i32>() else {
            continue;
        };
        let layer = if parsed < 0 {
            parsed + layer_count as i32
        } else {
            parsed
        };
        layers.push(layer);
    }
    layers
}

fn field_value(settings: &Settings, id: FieldId) -> SettingValue {
    use FieldId as F;
    use RaftPhase::{Base, Interface};
    use SettingValue as V;

    let s = settings;
    match id {
        F::RaftSize => V::Float(s.raft.size),
        F::BaseLayerCount => V::Int(s.raft[Base].layer_count),
        F::BaseMaterialDistanceRatio => {
            V::Float(s.raft[Base].material_distance_ratio)
        },
        F::BaseRotation => V::Float(s.raft[Base].rotation),
        F::BaseRotationPrLayer => V::Float(s.raft[Base].rotation_per_layer),
        F::BaseDistance => V::Float(s.raft[Base].distance),
        F::BaseThickness => V::Float(s.raft[Base].thickness),
        F::BaseTemperature => V::Float(s.raft[Base].temperature),
        F::InterfaceLayerCount => V::Int(s.raft[Interface].layer_count),
        F::InterfaceMaterialDistanceRatio => {
            V::Float(s.raft[Interface].material_distance_ratio)
        },
        F::InterfaceRotation => V::Float(s.raft[Interface].rotation),
        F::InterfaceRotationPrLayer => {
            V::Float(s.raft[Interface].rotation_per_layer)
        },
        F::InterfaceDistance => V::Float(s.raft[Interface].distance),
        F::InterfaceThickness => V::Float(s.raft[Interface].thickness),
        F::InterfaceTemperature => V::Float(s.raft[Interface].temperature),
        F::MinPrintSpeedXy => V::Float(s.hardware.min_print_speed_xy),
        F::MaxPrintSpeedXy => V::Float(s.hardware.max_print_speed_xy),
        F::MinPrintSpeedZ => V::Float(s.hardware.min_print_speed_z),
        F::MaxPrintSpeedZ => V::Float(s.hardware.max_print_speed_z),
        F::DistanceToReachFullSpeed => {
            V::Float(s.hardware.distance_to_reach_full_speed)
        },
        F::ExtrusionFactor => V::Float(s.hardware.extrusion_factor),
        F::LayerThickness => V::Float(s.hardware.layer_thickness),
        F::DownstreamMultiplier => V::Float(s.hardware.downstream_multiplier),
        F::DownstreamExtrusionMultiplier => {
            V::Float(s.hardware.downstream_extrusion_multiplier)
        },
        F::ExtrudedMaterialWidth => {
            V::Float(s.hardware.extruded_material_width)
        },
        F::PortName => V::Text(s.hardware.port_name.clone()),
        F::SerialSpeed => V::Int(s.hardware.serial_speed),
        F::ValidateConnection => V::Bool(s.hardware.validate_connection),
        F::KeepLines => V::Int(s.hardware.keep_lines),
        F::ReceivingBufferSize => V::Int(s.hardware.receiving_buffer_size),
        F::UseIncrementalEcode => V::Bool(s.slicing.use_incremental_ecode),
        F::Use3dGcode => V::Bool(s.slicing.use_3d_gcode),
        F::EnableAntiooze => V::Bool(s.slicing.enable_antiooze),
        F::AntioozeDistance => V::Float(s.slicing.antiooze_distance),
        F::AntioozeSpeed => V::Float(s.slicing.antiooze_speed),
        F::InfillDistance => V::Float(s.slicing.infill_distance),
        F::InfillRotation => V::Float(s.slicing.infill_rotation),
        F::InfillRotationPrLayer => {
            V::Float(s.slicing.infill_rotation_per_layer)
        },
        F::AltInfillDistance => V::Float(s.slicing.alt_infill_distance),
        F::AltInfillLayersText => {
            V::Text(s.slicing.alt_infill_layers_text.clone())
        },
        F::ShellOnly => V::Bool(s.slicing.shell_only),
        F::ShellCount => V::Int(s.slicing.shell_count),
        F::EnableAcceleration => V::Bool(s.slicing.enable_acceleration),
        F::Optimization => V::Float(s.slicing.optimization),
        F::FileLoggingEnabled => V::Bool(s.misc.file_logging_enabled),
        F::TempReadingEnabled => V::Bool(s.misc.temp_reading_enabled),
        F::ClearLogfilesWhenPrintStarts => {
            V::Bool(s.misc.clear_logfiles_when_print_starts)
        },
        F::DisplayGcode => V::Bool(s.display.display_gcode),
        F::GcodeDrawStart => V::Float(s.display.gcode_draw_start),
        F::GcodeDrawEnd => V::Float(s.display.gcode_draw_end),
        F::DisplayEndpoints => V::Bool(s.display.display_endpoints),
        F::DisplayNormals => V::Bool(s.display.display_normals),
        F::DisplayBbox => V::Bool(s.display.display_bbox),
        F::DisplayWireframe => V::Bool(s.display.display_wireframe),
        F::DisplayWireframeShaded => {
            V::Bool(s.display.display_wireframe_shaded)
        },
        F::DisplayPolygons => V::Bool(s.display.display_polygons),
        F::DisplayAllLayers => V::Bool(s.display.display_all_layers),
        F::DisplayInfill => V::Bool(s.display.display_infill),
        F::DisplayDebugInfill => V::Bool(s.display.display_debug_infill),
        F::DisplayDebug => V::Bool(s.display.display_debug),
        F::DisplayCuttingPlane => V::Bool(s.display.display_cutting_plane),
        F::DrawVertexNumbers => V::Bool(s.display.draw_vertex_numbers),
        F::DrawLineNumbers => V::Bool(s.display.draw_line_numbers),
        F::DrawOutlineNumbers => V::Bool(s.display.draw_outline_numbers),
        F::DrawCpVertexNumbers => V::Bool(s.display.draw_cp_vertex_numbers),
        F::DrawCpLineNumbers => V::Bool(s.display.draw_cp_line_numbers),
        F::DrawCpOutlineNumbers => V::Bool(s.display.draw_cp_outline_numbers),
        F::CuttingPlaneValue => V::Float(s.display.cutting_plane_value),
        F::PolygonOpacity => V::Float(s.display.polygon_opacity),
        F::LuminanceShowsSpeed => V::Bool(s.display.luminance_shows_speed),
        F::Highlight => V::Float(s.display.highlight),
        F::NormalsLength => V::Float(s.display.normals_length),
        F::EndPointSize => V::Float(s.display.end_point_size),
        F::TempUpdateSpeed => V::Float(s.display.temp_update_speed),
    }
}

fn set_field_value(settings: &mut Settings, id: FieldId, value: SettingValue) {
    use FieldId as F;
    use RaftPhase::{Base, Interface};
    use SettingValue as V;

    let s = settings;
    match (id, value) {
        (F::RaftSize, V::Float(v)) => s.raft.size = v,
        (F::BaseLayerCount, V::Int(v)) => s.raft[Base].layer_count = v,
        (F::BaseMaterialDistanceRatio, V::Float(v)) => {
            s.raft[Base].material_distance_ratio = v;
        },
        (F::BaseRotation, V::Float(v)) => s.raft[Base].rotation = v,
        (F::BaseRotationPrLayer, V::Float(v)) => {
            s.raft[Base].rotation_per_layer = v;
        },
        (F::BaseDistance, V::Float(v)) => s.raft[Base].distance = v,
        (F::BaseThickness, V::Float(v)) => s.raft[Base].thickness = v,
        (F::BaseTemperature, V::Float(v)) => s.raft[Base].temperature = v,
        (F::InterfaceLayerCount, V::Int(v)) => {
            s.raft[Interface].layer_count = v;
        },
        (F::InterfaceMaterialDistanceRatio, V::Float(v)) => {
            s.raft[Interface].material_distance_ratio = v;
        },
        (F::InterfaceRotation, V::Float(v)) => s.raft[Interface].rotation = v,
        (F::InterfaceRotationPrLayer, V::Float(v)) => {
            s.raft[Interface].rotation_per_layer = v;
        },
        (F::InterfaceDistance, V::Float(v)) => s.raft[Interface].distance = v,
        (F::InterfaceThickness, V::Float(v)) => {
            s.raft[Interface].thickness = v;
        },
        (F::InterfaceTemperature, V::Float(v)) => {
            s.raft[Interface].temperature = v;
        },
        (F::MinPrintSpeedXy, V::Float(v)) => s.hardware.min_print_speed_xy = v,
        (F::MaxPrintSpeedXy, V::Float(v)) => s.hardware.max_print_speed_xy = v,
        (F::MinPrintSpeedZ, V::Float(v)) => s.hardware.min_print_speed_z = v,
        (F::MaxPrintSpeedZ, V::Float(v)) => s.hardware.max_print_speed_z = v,
        (F::DistanceToReachFullSpeed, V::Float(v)) => {
            s.hardware.distance_to_reach_full_speed = v;
        },
        (F::ExtrusionFactor, V::Float(v)) => s.hardware.extrusion_factor = v,
        (F::LayerThickness, V::Float(v)) => s.hardware.layer_thickness = v,
        (F::DownstreamMultiplier, V::Float(v)) => {
            s.hardware.downstream_multiplier = v;
        },
        (F::DownstreamExtrusionMultiplier, V::Float(v)) => {
            s.hardware.downstream_extrusion_multiplier = v;
        },
        (F::ExtrudedMaterialWidth, V::Float(v)) => {
            s.hardware.extruded_material_width = v;
        },
        (F::PortName, V::Text(v)) => s.hardware.port_name = v,
        (F::SerialSpeed, V::Int(v)) => s.hardware.serial_speed = v,
        (F::ValidateConnection, V::Bool(v)) => {
            s.hardware.validate_connection = v;
        },
        (F::KeepLines, V::Int(v)) => s.hardware.keep_lines = v,
        (F::ReceivingBufferSize, V::Int(v)) => {
            s.hardware.receiving_buffer_size = v;
        },
        (F::UseIncrementalEcode, V::Bool(v)) => {
            s.slicing.use_incremental_ecode = v;
        },
        (F::Use3dGcode, V::Bool(v)) => s.slicing.use_3d_gcode = v,
        (F::EnableAntiooze, V::Bool(v)) => s.slicing.enable_antiooze = v,
        (F::AntioozeDistance, V::Float(v)) => s.slicing.antiooze_distance = v,
        (F::AntioozeSpeed, V::Float(v)) => s.slicing.antiooze_speed = v,
        (F::InfillDistance, V::Float(v)) => s.slicing.infill_distance = v,
        (F::InfillRotation, V::Float(v)) => s.slicing.infill_rotation = v,
        (F::InfillRotationPrLayer, V::Float(v)) => {
            s.slicing.infill_rotation_per_layer = v;
        },
        (F::AltInfillDistance, V::Float(v)) => {
            s.slicing.alt_infill_distance = v;
        },
        (F::AltInfillLayersText, V::Text(v)) => {
            s.slicing.alt_infill_layers_text = v;
        },
        (F::ShellOnly, V::Bool(v)) => s.slicing.shell_only = v,
        (F::ShellCount, V::Int(v)) => s.slicing.shell_count = v,
        (F::EnableAcceleration, V::Bool(v)) => {
            s.slicing.enable_acceleration = v;
        },
        (F::Optimization, V::Float(v)) => s.slicing.optimization = v,
        (F::FileLoggingEnabled, V::Bool(v)) => {
            s.misc.file_logging_enabled = v;
        },
        (F::TempReadingEnabled, V::Bool(v)) => {
            s.misc.temp_reading_enabled = v;
        },
        (F::ClearLogfilesWhenPrintStarts, V::Bool(v)) => {
            s.misc.clear_logfiles_when_print_starts = v;
        },
        (F::DisplayGcode, V::Bool(v)) => s.display.display_gcode = v,
        (F::GcodeDrawStart, V::Float(v)) => s.display.gcode_draw_start = v,
        (F::GcodeDrawEnd, V::Float(v)) => s.display.gcode_draw_end = v,
        (F::DisplayEndpoints, V::Bool(v)) => s.display.display_endpoints = v,
        (F::DisplayNormals, V::Bool(v)) => s.display.display_normals = v,
        (F::DisplayBbox, V::Bool(v)) => s.display.display_bbox = v,
        (F::DisplayWireframe, V::Bool(v)) => s.display.display_wireframe = v,
        (F::DisplayWireframeShaded, V::Bool(v)) => {
            s.display.display_wireframe_shaded = v;
        },
        (F::DisplayPolygons, V::Bool(v)) => s.display.display_polygons = v,
        (F::DisplayAllLayers, V::Bool(v)) => s.display.display_all_layers = v,
        (F::DisplayInfill, V::Bool(v)) => s.display.display_infill = v,
        (F::DisplayDebugInfill, V::Bool(v)) => {
            s.display.display_debug_infill = v;
        },
        (F::DisplayDebug, V::Bool(v)) => s.display.display_debug = v,
        (F::DisplayCuttingPlane, V::Bool(v)) => {
            s.display.display_cutting_plane = v;
        },
        (F::DrawVertexNumbers, V::Bool(v)) => {
            s.display.draw_vertex_numbers = v;
        },
        (F::DrawLineNumbers, V::Bool(v)) => s.display.draw_line_numbers = v,
        (F::DrawOutlineNumbers, V::Bool(v)) => {
            s.display.draw_outline_numbers = v;
        },
        (F::DrawCpVertexNumbers, V::Bool(v)) => {
            s.display.draw_cp_vertex_numbers = v;
        },
        (F::DrawCpLineNumbers, V::Bool(v)) => {
            s.display.draw_cp_line_numbers = v;
        },
        (F::DrawCpOutlineNumbers, V::Bool(v)) => {
            s.display.draw_cp_outline_numbers = v;
        },
        (F::CuttingPlaneValue, V::Float(v)) => {
            s.display.cutting_plane_value = v;
        },
        (F::PolygonOpacity, V::Float(v)) => s.display.polygon_opacity = v,
        (F::LuminanceShowsSpeed, V::Bool(v)) => {
            s.display.luminance_shows_speed = v;
        },
        (F::Highlight, V::Float(v)) => s.display.highlight = v,
        (F::NormalsLength, V::Float(v)) => s.display.normals_length = v,
        (F::EndPointSize, V::Float(v)) => s.display.end_point_size = v,
        (F::TempUpdateSpeed, V::Float(v)) => s.display.temp_update_speed = v,
        (id, value) => panic!(
            "field {id:?} cannot hold a {:?} value",
            value.kind()
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{self, FieldId, ScriptKind};
    use crate::value::SettingValue;

    use super::{RaftPhase, Settings, ShrinkQuality, alt_infill_layers};

    #[test]
    fn given_default_instance_when_inspected_then_schema_defaults_hold() {
        let settings = Settings::default();

        assert_eq!(settings.raft.size, 1.33);
        assert_eq!(settings.raft[RaftPhase::Base].layer_count, 1);
        assert_eq!(settings.raft[RaftPhase::Interface].layer_count, 2);
        assert_eq!(settings.hardware.serial_speed, 57600);
        assert_eq!(settings.slicing.shell_count, 1);
        assert_eq!(settings.slicing.shrink_quality, ShrinkQuality::Fast);
        assert!(settings.display.display_gcode);
        assert_eq!(settings.hardware.volume, [200.0, 200.0, 140.0]);
        assert!(settings.script(ScriptKind::Start).contains("G21"));
        assert!(settings.script(ScriptKind::Layer).is_empty());
        assert!(settings.script(ScriptKind::End).contains("M104 S0.0"));
    }

    #[test]
    fn given_default_instance_when_defaults_reapplied_then_nothing_changes() {
        let mut settings = Settings::default();
        let baseline = settings.clone();

        settings.apply_defaults();

        assert_eq!(settings, baseline);
    }

    #[test]
    fn given_modified_instance_when_defaults_applied_then_values_reset() {
        let mut settings = Settings::default();
        settings.slicing.shell_count = 9;
        settings.slicing.shrink_quality = ShrinkQuality::Precise;
        settings.gcode.layer = String::from("M106");

        settings.apply_defaults();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_every_descriptor_when_read_then_value_matches_its_kind() {
        let settings = Settings::default();

        for descriptor in schema::descriptors() {
            let value = settings.value(descriptor.id);

            assert_eq!(
                value.kind(),
                descriptor.kind(),
                "kind mismatch for {:?}",
                descriptor.id
            );
            assert_eq!(value, descriptor.default.to_value());
        }
    }

    #[test]
    fn given_accessor_write_when_read_back_then_value_round_trips() {
        let mut settings = Settings::default();

        settings.set_value(FieldId::ShellCount, SettingValue::Int(3));
        settings.set_value(FieldId::ShellOnly, SettingValue::Bool(true));
        settings.set_value(FieldId::RaftSize, SettingValue::Float(2.5));
        settings.set_value(
            FieldId::PortName,
            SettingValue::Text(String::from("/dev/ttyACM0")),
        );

        assert_eq!(
            settings.value(FieldId::ShellCount),
            SettingValue::Int(3)
        );
        assert_eq!(
            settings.value(FieldId::ShellOnly),
            SettingValue::Bool(true)
        );
        assert_eq!(
            settings.value(FieldId::RaftSize),
            SettingValue::Float(2.5)
        );
        assert_eq!(
            settings.value(FieldId::PortName),
            SettingValue::Text(String::from("/dev/ttyACM0"))
        );
    }

    #[test]
    #[should_panic(expected = "cannot hold")]
    fn given_mismatched_tag_when_set_then_accessor_panics() {
        let mut settings = Settings::default();

        settings.set_value(FieldId::ShellCount, SettingValue::Bool(true));
    }

    #[test]
    fn given_mixed_layer_list_when_parsed_then_tokens_resolve_in_order() {
        let layers = alt_infill_layers("-1,2,abc,-5", 10);

        assert_eq!(layers, vec![9, 2, 5]);
    }

    #[test]
    fn given_spaced_tokens_when_parsed_then_whitespace_is_tolerated() {
        let layers = alt_infill_layers(" 3 , -2 ,", 8);

        assert_eq!(layers, vec![3, 6]);
    }

    #[test]
    fn given_empty_text_when_parsed_then_list_is_empty() {
        assert!(alt_infill_layers("", 10).is_empty());
    }

    #[test]
    fn given_same_text_when_layer_count_changes_then_result_follows() {
        let mut settings = Settings::default();
        settings.slicing.alt_infill_layers_text = String::from("-1");

        assert_eq!(settings.slicing.alt_infill_layers(10), vec![9]);
        assert_eq!(settings.slicing.alt_infill_layers(4), vec![3]);
    }
}
