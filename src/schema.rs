//! Static schema: one descriptor per configurable field, plus the range
//! table for numeric controls, the script slots and the legacy mode keys.
//!
//! The table is built once as a `const` and never mutated; persistence and
//! UI binding both iterate it in definition order.

use crate::value::{FieldKind, SettingValue};

/// Stable identifier for every descriptor-backed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // Raft
    RaftSize,
    BaseLayerCount,
    BaseMaterialDistanceRatio,
    BaseRotation,
    BaseRotationPrLayer,
    BaseDistance,
    BaseThickness,
    BaseTemperature,
    InterfaceLayerCount,
    InterfaceMaterialDistanceRatio,
    InterfaceRotation,
    InterfaceRotationPrLayer,
    InterfaceDistance,
    InterfaceThickness,
    InterfaceTemperature,
    // Hardware
    MinPrintSpeedXy,
    MaxPrintSpeedXy,
    MinPrintSpeedZ,
    MaxPrintSpeedZ,
    DistanceToReachFullSpeed,
    ExtrusionFactor,
    LayerThickness,
    DownstreamMultiplier,
    DownstreamExtrusionMultiplier,
    ExtrudedMaterialWidth,
    PortName,
    SerialSpeed,
    ValidateConnection,
    KeepLines,
    ReceivingBufferSize,
    // Slicing
    UseIncrementalEcode,
    Use3dGcode,
    EnableAntiooze,
    AntioozeDistance,
    AntioozeSpeed,
    InfillDistance,
    InfillRotation,
    InfillRotationPrLayer,
    AltInfillDistance,
    AltInfillLayersText,
    ShellOnly,
    ShellCount,
    EnableAcceleration,
    Optimization,
    // Misc
    FileLoggingEnabled,
    TempReadingEnabled,
    ClearLogfilesWhenPrintStarts,
    // Display
    DisplayGcode,
    GcodeDrawStart,
    GcodeDrawEnd,
    DisplayEndpoints,
    DisplayNormals,
    DisplayBbox,
    DisplayWireframe,
    DisplayWireframeShaded,
    DisplayPolygons,
    DisplayAllLayers,
    DisplayInfill,
    DisplayDebugInfill,
    DisplayDebug,
    DisplayCuttingPlane,
    DrawVertexNumbers,
    DrawLineNumbers,
    DrawOutlineNumbers,
    DrawCpVertexNumbers,
    DrawCpLineNumbers,
    DrawCpOutlineNumbers,
    CuttingPlaneValue,
    PolygonOpacity,
    LuminanceShowsSpeed,
    Highlight,
    NormalsLength,
    EndPointSize,
    TempUpdateSpeed,
}

/// Default literal for one field; its tag doubles as the field's type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Bool(bool),
    Int(i32),
    Float(f64),
    Text(&'static str),
}

impl FieldDefault {
    /// Return the type tag implied by this default.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldDefault::Bool(_) => FieldKind::Bool,
            FieldDefault::Int(_) => FieldKind::Int,
            FieldDefault::Float(_) => FieldKind::Float,
            FieldDefault::Text(_) => FieldKind::Text,
        }
    }

    /// Materialize the default as an owned value.
    pub fn to_value(&self) -> SettingValue {
        match self {
            FieldDefault::Bool(value) => SettingValue::Bool(*value),
            FieldDefault::Int(value) => SettingValue::Int(*value),
            FieldDefault::Float(value) => SettingValue::Float(*value),
            FieldDefault::Text(value) => {
                SettingValue::Text(String::from(*value))
            },
        }
    }
}

/// Schema entry describing one configurable field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Identifier used by the value accessor.
    pub id: FieldId,
    /// Key used in the persisted document. Unique across the table.
    pub key: &'static str,
    /// Name of the UI control bound to this field, when one exists.
    pub ui_name: Option<&'static str>,
    /// Value applied by the defaults pass.
    pub default: FieldDefault,
}

impl FieldDescriptor {
    /// Return the field's type tag.
    pub fn kind(&self) -> FieldKind {
        self.default.kind()
    }
}

/// Range configuration for one numeric control, keyed by UI control name.
///
/// Independent of any field's value; some entries configure interaction
/// controls that have no schema field at all.
#[derive(Debug, Clone, Copy)]
pub struct RangeDescriptor {
    pub ui_name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub page: f64,
}

/// The three free-form G-code scripts kept outside the descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Start,
    Layer,
    End,
}

impl ScriptKind {
    pub const ALL: [ScriptKind; 3] =
        [ScriptKind::Start, ScriptKind::Layer, ScriptKind::End];

    /// Key used for this script in the persisted document.
    pub fn key(self) -> &'static str {
        match self {
            ScriptKind::Start => "GCodeStartText",
            ScriptKind::Layer => "GCodeLayerText",
            ScriptKind::End => "GCodeEndText",
        }
    }

    /// Name of the text-editing surface bound to this script.
    pub fn ui_name(self) -> &'static str {
        match self {
            ScriptKind::Start => "txt_gcode_start",
            ScriptKind::Layer => "txt_gcode_next_layer",
            ScriptKind::End => "txt_gcode_end",
        }
    }
}

/// Legacy boolean key meaning "precise shrink mode is active".
///
/// Read before [`SHRINK_FAST_KEY`] on load; both keys are always written on
/// save so documents stay readable by older versions.
pub const SHRINK_PRECISE_KEY: &str = "ShrinkLogick";

/// Legacy boolean key meaning "fast shrink mode is active".
pub const SHRINK_FAST_KEY: &str = "ShrinkFast";

/// Return every field descriptor in definition order.
pub fn descriptors() -> &'static [FieldDescriptor] {
    &SCHEMA
}

/// Look up a descriptor by its persisted key.
pub fn descriptor_for_key(key: &str) -> Option<&'static FieldDescriptor> {
    SCHEMA.iter().find(|descriptor| descriptor.key == key)
}

/// Return every range descriptor.
pub fn ranges() -> &'static [RangeDescriptor] {
    &RANGES
}

const fn bool_field(
    id: FieldId,
    key: &'static str,
    ui_name: &'static str,
    default: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        key,
        ui_name: Some(ui_name),
        default: FieldDefault::Bool(default),
    }
}

const fn int_field(
    id: FieldId,
    key: &'static str,
    ui_name: &'static str,
    default: i32,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        key,
        ui_name: Some(ui_name),
        default: FieldDefault::Int(default),
    }
}

const fn float_field(
    id: FieldId,
    key: &'static str,
    ui_name: &'static str,
    default: f64,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        key,
        ui_name: Some(ui_name),
        default: FieldDefault::Float(default),
    }
}

const fn text_field(
    id: FieldId,
    key: &'static str,
    ui_name: &'static str,
    default: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        key,
        ui_name: Some(ui_name),
        default: FieldDefault::Text(default),
    }
}

#[cfg(windows)]
const DEFAULT_PORT_NAME: &str = "COM0";
#[cfg(not(windows))]
const DEFAULT_PORT_NAME: &str = "/dev/ttyUSB0";

use FieldId as F;

const SCHEMA: [FieldDescriptor; 74] = [
    // Raft
    float_field(F::RaftSize, "RaftSize", "Raft.Size", 1.33),
    // Raft base phase
    int_field(F::BaseLayerCount, "BaseLayerCount", "BaseLayerCount", 1),
    float_field(
        F::BaseMaterialDistanceRatio,
        "BaseMaterialDistanceRatio",
        "BaseMaterialDistanceRatio",
        1.8,
    ),
    float_field(F::BaseRotation, "BaseRotation", "BaseRotation", 0.0),
    float_field(
        F::BaseRotationPrLayer,
        "BaseRotationPrLayer",
        "BaseRotationPrLayer",
        90.0,
    ),
    float_field(F::BaseDistance, "BaseDistance", "BaseDistance", 2.0),
    float_field(F::BaseThickness, "BaseThickness", "BaseThickness", 1.0),
    float_field(F::BaseTemperature, "BaseTemperature", "BaseTemperature", 1.10),
    // Raft interface phase
    int_field(
        F::InterfaceLayerCount,
        "InterfaceLayerCount",
        "InterfaceLayerCount",
        2,
    ),
    float_field(
        F::InterfaceMaterialDistanceRatio,
        "InterfaceMaterialDistanceRatio",
        "InterfaceMaterialDistanceRatio",
        1.0,
    ),
    float_field(
        F::InterfaceRotation,
        "InterfaceRotation",
        "InterfaceRotation",
        90.0,
    ),
    float_field(
        F::InterfaceRotationPrLayer,
        "InterfaceRotationPrLayer",
        "InterfaceRotationPrLayer",
        90.0,
    ),
    float_field(
        F::InterfaceDistance,
        "InterfaceDistance",
        "InterfaceDistance",
        2.0,
    ),
    float_field(
        F::InterfaceThickness,
        "InterfaceThickness",
        "InterfaceThickness",
        1.0,
    ),
    float_field(
        F::InterfaceTemperature,
        "InterfaceTemperature",
        "InterfaceTemperature",
        1.0,
    ),
    // Hardware
    float_field(
        F::MinPrintSpeedXy,
        "MinPrintSpeedXY",
        "Hardware.MinPrintSpeedXY",
        1000.0,
    ),
    float_field(
        F::MaxPrintSpeedXy,
        "MaxPrintSpeedXY",
        "Hardware.MaxPrintSpeedXY",
        4000.0,
    ),
    float_field(
        F::MinPrintSpeedZ,
        "MinPrintSpeedZ",
        "Hardware.MinPrintSpeedZ",
        50.0,
    ),
    float_field(
        F::MaxPrintSpeedZ,
        "MaxPrintSpeedZ",
        "Hardware.MaxPrintSpeedZ",
        150.0,
    ),
    float_field(
        F::DistanceToReachFullSpeed,
        "DistanceToReachFullSpeed",
        "Hardware.DistanceToReachFullSpeed",
        1.5,
    ),
    float_field(
        F::ExtrusionFactor,
        "ExtrusionFactor",
        "Hardware.ExtrusionFactor",
        1.0,
    ),
    float_field(
        F::LayerThickness,
        "LayerThickness",
        "Hardware.LayerThickness",
        0.4,
    ),
    float_field(
        F::DownstreamMultiplier,
        "DownstreamMultiplier",
        "Hardware.DownstreamMultiplier",
        1.0,
    ),
    float_field(
        F::DownstreamExtrusionMultiplier,
        "DownstreamExtrusionMultiplier",
        "Hardware.DownstreamExtrusionMultiplier",
        1.0,
    ),
    float_field(
        F::ExtrudedMaterialWidth,
        "ExtrudedMaterialWidth",
        "Hardware.ExtrudedMaterialWidth",
        0.7,
    ),
    text_field(
        F::PortName,
        "msPortName",
        "Hardware.PortName",
        DEFAULT_PORT_NAME,
    ),
    int_field(F::SerialSpeed, "miSerialSpeed", "Hardware.SerialSpeed", 57600),
    bool_field(
        F::ValidateConnection,
        "ValidateConnection",
        "Hardware.ValidateConnection",
        true,
    ),
    int_field(F::KeepLines, "KeepLines", "Hardware.KeepLines", 1000),
    int_field(
        F::ReceivingBufferSize,
        "ReceivingBufferSize",
        "Hardware.ReceivingBufferSize",
        4,
    ),
    // Slicing
    bool_field(
        F::UseIncrementalEcode,
        "UseIncrementalEcode",
        "Slicing.UseIncrementalEcode",
        true,
    ),
    bool_field(F::Use3dGcode, "Use3DGcode", "Slicing.Use3DGcode", false),
    bool_field(
        F::EnableAntiooze,
        "EnableAntiooze",
        "Slicing.EnableAntiooze",
        false,
    ),
    float_field(
        F::AntioozeDistance,
        "AntioozeDistance",
        "Slicing.AntioozeDistance",
        4.5,
    ),
    float_field(
        F::AntioozeSpeed,
        "AntioozeSpeed",
        "Slicing.AntioozeSpeed",
        1000.0,
    ),
    float_field(
        F::InfillDistance,
        "InFillDistance",
        "Slicing.InfillDistance",
        2.0,
    ),
    float_field(
        F::InfillRotation,
        "InfillRotation",
        "Slicing.InfillRotation",
        45.0,
    ),
    float_field(
        F::InfillRotationPrLayer,
        "InfillRotationPrLayer",
        "Slicing.InfillRotationPrLayer",
        90.0,
    ),
    float_field(
        F::AltInfillDistance,
        "AltInfillDistance",
        "Slicing.AltInfillDistance",
        2.0,
    ),
    text_field(
        F::AltInfillLayersText,
        "AltInfillLayersText",
        "Slicing.AltInfillLayersText",
        "",
    ),
    bool_field(F::ShellOnly, "ShellOnly", "Slicing.ShellOnly", false),
    int_field(F::ShellCount, "ShellCount", "Slicing.ShellCount", 1),
    bool_field(
        F::EnableAcceleration,
        "EnableAcceleration",
        "Slicing.EnableAcceleration",
        true,
    ),
    // Shrink quality is the legacy dual-boolean mode, handled by storage.
    float_field(
        F::Optimization,
        "Optimization",
        "Slicing.Optimization",
        0.02,
    ),
    // Misc
    bool_field(
        F::FileLoggingEnabled,
        "FileLoggingEnabled",
        "Misc.FileLoggingEnabled",
        true,
    ),
    bool_field(
        F::TempReadingEnabled,
        "TempReadingEnabled",
        "Misc.TempReadingEnabled",
        true,
    ),
    bool_field(
        F::ClearLogfilesWhenPrintStarts,
        "ClearLogfilesWhenPrintStarts",
        "Misc.ClearLogfilesWhenPrintStarts",
        true,
    ),
    // Display
    bool_field(F::DisplayGcode, "DisplayGCode", "Display.DisplayGCode", true),
    float_field(
        F::GcodeDrawStart,
        "GCodeDrawStart",
        "Display.GCodeDrawStart",
        0.0,
    ),
    float_field(F::GcodeDrawEnd, "GCodeDrawEnd", "Display.GCodeDrawEnd", 1.0),
    bool_field(
        F::DisplayEndpoints,
        "DisplayEndpoints",
        "Display.DisplayEndpoints",
        false,
    ),
    bool_field(
        F::DisplayNormals,
        "DisplayNormals",
        "Display.DisplayNormals",
        false,
    ),
    bool_field(F::DisplayBbox, "DisplayBBox", "Display.DisplayBBox", false),
    bool_field(
        F::DisplayWireframe,
        "DisplayWireframe",
        "Display.DisplayWireframe",
        false,
    ),
    bool_field(
        F::DisplayWireframeShaded,
        "DisplayWireframeShaded",
        "Display.DisplayWireframeShaded",
        true,
    ),
    bool_field(
        F::DisplayPolygons,
        "DisplayPolygons",
        "Display.DisplayPolygons",
        true,
    ),
    bool_field(
        F::DisplayAllLayers,
        "DisplayAllLayers",
        "Display.DisplayAllLayers",
        false,
    ),
    bool_field(
        F::DisplayInfill,
        "DisplayinFill",
        "Display.DisplayinFill",
        false,
    ),
    bool_field(
        F::DisplayDebugInfill,
        "DisplayDebuginFill",
        "Display.DisplayDebuginFill",
        false,
    ),
    bool_field(F::DisplayDebug, "DisplayDebug", "Display.DisplayDebug", false),
    bool_field(
        F::DisplayCuttingPlane,
        "DisplayCuttingPlane",
        "Display.DisplayCuttingPlane",
        false,
    ),
    bool_field(
        F::DrawVertexNumbers,
        "DrawVertexNumbers",
        "Display.DrawVertexNumbers",
        false,
    ),
    bool_field(
        F::DrawLineNumbers,
        "DrawLineNumbers",
        "Display.DrawLineNumbers",
        false,
    ),
    bool_field(
        F::DrawOutlineNumbers,
        "DrawOutlineNumbers",
        "Display.DrawOutlineNumbers",
        false,
    ),
    bool_field(
        F::DrawCpVertexNumbers,
        "DrawCPVertexNumbers",
        "Display.DrawCPVertexNumbers",
        false,
    ),
    bool_field(
        F::DrawCpLineNumbers,
        "DrawCPLineNumbers",
        "Display.DrawCPLineNumbers",
        false,
    ),
    bool_field(
        F::DrawCpOutlineNumbers,
        "DrawCPOutlineNumbers",
        "Display.DrawCPOutlineNumbers",
        false,
    ),
    float_field(
        F::CuttingPlaneValue,
        "CuttingPlaneValue",
        "Display.CuttingPlaneValue",
        0.0,
    ),
    float_field(
        F::PolygonOpacity,
        "PolygonOpacity",
        "Display.PolygonOpacity",
        0.5,
    ),
    bool_field(
        F::LuminanceShowsSpeed,
        "LuminanceShowsSpeed",
        "Display.LuminanceShowsSpeed",
        false,
    ),
    float_field(F::Highlight, "Highlight", "Display.Highlight", 0.7),
    float_field(
        F::NormalsLength,
        "NormalsLength",
        "Display.NormalsLength",
        10.0,
    ),
    float_field(F::EndPointSize, "EndPointSize", "Display.EndPointSize", 8.0),
    float_field(
        F::TempUpdateSpeed,
        "TempUpdateSpeed",
        "Display.TempUpdateSpeed",
        3.0,
    ),
];

const RANGES: [RangeDescriptor; 4] = [
    RangeDescriptor {
        ui_name: "Slicing.ShellCount",
        min: 0.0,
        max: 100.0,
        step: 1.0,
        page: 5.0,
    },
    RangeDescriptor {
        ui_name: "Slicing.Rotate",
        min: -360.0,
        max: 360.0,
        step: 5.0,
        page: 45.0,
    },
    RangeDescriptor {
        ui_name: "Slicing.InfillRotation",
        min: -360.0,
        max: 360.0,
        step: 5.0,
        page: 90.0,
    },
    RangeDescriptor {
        ui_name: "Slicing.InfillDistance",
        min: 0.0,
        max: 10.0,
        step: 0.1,
        page: 1.0,
    },
];
