//! Schema-driven settings registry for a 3D-printing host.
//!
//! A static descriptor table ([`schema`]) names every configurable field
//! with its persisted key, UI control name and default. The live instance
//! ([`Settings`]) exposes one typed accessor over all of them, persistence
//! ([`storage`]) reads and writes the document with graceful degradation,
//! and the binder ([`UiBinder`]) wires a widget surface to the instance
//! without knowing the toolkit.

pub mod binding;
pub mod errors;
pub mod model;
pub mod schema;
pub mod storage;
pub mod value;

pub use binding::{AttachReport, ControlEvent, UiBinder, UiSurface};
pub use errors::SettingsError;
pub use model::{
    DisplaySettings, GcodeScripts, HardwareSettings, MiscSettings, RaftPhase,
    RaftPhaseSettings, RaftSettings, Settings, ShrinkQuality,
    SlicingSettings, alt_infill_layers,
};
pub use schema::{
    FieldDefault, FieldDescriptor, FieldId, RangeDescriptor, ScriptKind,
};
pub use storage::{
    SettingsLoad, SettingsLoadStatus, default_settings_path, load_settings,
    load_settings_from_path, save_settings, save_settings_to_path,
    settings_from_json, settings_from_str, settings_to_json,
    settings_to_string,
};
pub use value::{FieldKind, SettingValue};
