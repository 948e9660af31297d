//! Binding between the settings instance and a widget surface.
//!
//! The binder only knows control names; the surface trait hides the widget
//! toolkit. Attaching pushes ranges and current values outward and records
//! which control feeds which field, and [`UiBinder::control_changed`]
//! routes edits back into the instance.

use std::collections::HashMap;

use crate::model::{Settings, ShrinkQuality};
use crate::schema::{self, FieldId, RangeDescriptor, ScriptKind};
use crate::value::{FieldKind, SettingValue};

/// Name of the control selecting the shrink quality mode.
pub const SHRINK_CONTROL: &str = "Slicing.ShrinkQuality";

/// Widget surface the binder talks to.
///
/// Implemented once per toolkit; the binder never sees widget types.
pub trait UiSurface {
    /// Whether a control with this name exists on the surface.
    fn has_control(&self, name: &str) -> bool;

    /// Configure the bounds of a numeric control.
    fn set_control_range(&mut self, name: &str, range: &RangeDescriptor);

    /// Push a field value into its control.
    fn set_control_value(&mut self, name: &str, value: SettingValue);

    /// Replace the text of a script editing surface.
    fn set_script_text(&mut self, name: &str, text: &str);

    /// Select the active shrink quality choice.
    fn set_shrink_choice(&mut self, quality: ShrinkQuality);
}

/// What a control writes back into the settings instance.
#[derive(Debug, Clone)]
pub enum ControlEvent {
    Value(SettingValue),
    Script(String),
    Shrink(ShrinkQuality),
}

/// Outcome of one attach pass.
#[derive(Debug, Clone, Default)]
pub struct AttachReport {
    /// Number of controls bound to a field, script or mode.
    pub bound: usize,
    /// Names the surface did not provide. The remaining controls work.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum Binding {
    Field(FieldId, FieldKind),
    Script(ScriptKind),
    Shrink,
}

/// Routes control edits to settings fields after an attach pass.
#[derive(Debug, Default)]
pub struct UiBinder {
    bindings: HashMap<String, Binding>,
}

impl UiBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire the surface to the settings instance.
    ///
    /// Ranges are configured before values so clamping widgets never see a
    /// value outside their bounds. A missing control is reported and
    /// skipped; everything else still binds. Text-typed fields stay
    /// unbound; the script slots are the only text the surface carries.
    pub fn attach(
        &mut self,
        surface: &mut dyn UiSurface,
        settings: &Settings,
    ) -> AttachReport {
        let mut report = AttachReport::default();
        self.bindings.clear();

        for range in schema::ranges() {
            if !surface.has_control(range.ui_name) {
                miss(&mut report, range.ui_name);
                continue;
            }
            surface.set_control_range(range.ui_name, range);
        }

        for descriptor in schema::descriptors() {
            let Some(ui_name) = descriptor.ui_name else {
                continue;
            };
            // Free-text fields have no generic control binding; only the
            // dedicated script surfaces carry text.
            if descriptor.kind() == FieldKind::Text {
                log::warn!("control {ui_name} is text-typed, not bound");
                continue;
            }
            if !surface.has_control(ui_name) {
                miss(&mut report, ui_name);
                continue;
            }
            surface.set_control_value(ui_name, settings.value(descriptor.id));
            self.bindings.insert(
                String::from(ui_name),
                Binding::Field(descriptor.id, descriptor.kind()),
            );
            report.bound += 1;
        }

        for kind in ScriptKind::ALL {
            let ui_name = kind.ui_name();
            if !surface.has_control(ui_name) {
                miss(&mut report, ui_name);
                continue;
            }
            surface.set_script_text(ui_name, settings.script(kind));
            self.bindings
                .insert(String::from(ui_name), Binding::Script(kind));
            report.bound += 1;
        }

        if surface.has_control(SHRINK_CONTROL) {
            surface.set_shrink_choice(settings.slicing.shrink_quality);
            self.bindings
                .insert(String::from(SHRINK_CONTROL), Binding::Shrink);
            report.bound += 1;
        } else {
            miss(&mut report, SHRINK_CONTROL);
        }

        report
    }

    /// Apply one control edit to the settings instance.
    ///
    /// Returns whether the edit was applied. Unknown controls and events
    /// whose shape does not fit the bound field are dropped with a warning;
    /// edits arrive from outside, so they are never trusted to match.
    pub fn control_changed(
        &self,
        settings: &mut Settings,
        name: &str,
        event: ControlEvent,
    ) -> bool {
        let Some(binding) = self.bindings.get(name) else {
            log::warn!("edit on unbound control {name} dropped");
            return false;
        };

        match (binding, event) {
            (Binding::Field(id, expected), ControlEvent::Value(value)) => {
                let expected = *expected;
                if value.kind() != expected {
                    log::warn!(
                        "control {name} sent a {:?} value, expected {expected:?}",
                        value.kind()
                    );
                    return false;
                }
                settings.set_value(*id, value);
                true
            },
            (Binding::Script(kind), ControlEvent::Script(text)) => {
                settings.set_script(*kind, text);
                true
            },
            (Binding::Shrink, ControlEvent::Shrink(quality)) => {
                settings.slicing.shrink_quality = quality;
                true
            },
            (_, event) => {
                log::warn!("control {name} sent an unexpected {event:?}");
                false
            },
        }
    }
}

fn miss(report: &mut AttachReport, name: &str) {
    log::warn!("surface has no control named {name}");
    report.missing.push(String::from(name));
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use crate::model::{Settings, ShrinkQuality};
    use crate::schema::{self, RangeDescriptor, ScriptKind};
    use crate::value::{FieldKind, SettingValue};

    use super::{
        AttachReport, ControlEvent, SHRINK_CONTROL, UiBinder, UiSurface,
    };

    #[derive(Default)]
    struct FakeSurface {
        known: HashSet<String>,
        ranges: HashMap<String, (f64, f64, f64, f64)>,
        values: HashMap<String, SettingValue>,
        scripts: HashMap<String, String>,
        shrink: Option<ShrinkQuality>,
    }

    impl FakeSurface {
        fn with_every_control() -> Self {
            let mut surface = Self::default();
            for descriptor in schema::descriptors() {
                if let Some(ui_name) = descriptor.ui_name {
                    surface.known.insert(String::from(ui_name));
                }
            }
            for range in schema::ranges() {
                surface.known.insert(String::from(range.ui_name));
            }
            for kind in ScriptKind::ALL {
                surface.known.insert(String::from(kind.ui_name()));
            }
            surface.known.insert(String::from(SHRINK_CONTROL));
            surface
        }
    }

    impl UiSurface for FakeSurface {
        fn has_control(&self, name: &str) -> bool {
            self.known.contains(name)
        }

        fn set_control_range(&mut self, name: &str, range: &RangeDescriptor) {
            self.ranges.insert(
                String::from(name),
                (range.min, range.max, range.step, range.page),
            );
        }

        fn set_control_value(&mut self, name: &str, value: SettingValue) {
            self.values.insert(String::from(name), value);
        }

        fn set_script_text(&mut self, name: &str, text: &str) {
            self.scripts.insert(String::from(name), String::from(text));
        }

        fn set_shrink_choice(&mut self, quality: ShrinkQuality) {
            self.shrink = Some(quality);
        }
    }

    fn attach_full() -> (UiBinder, FakeSurface, Settings, AttachReport) {
        let mut binder = UiBinder::new();
        let mut surface = FakeSurface::with_every_control();
        let settings = Settings::default();

        let report = binder.attach(&mut surface, &settings);

        (binder, surface, settings, report)
    }

    #[test]
    fn given_full_surface_when_attached_then_every_control_binds() {
        let (_, surface, settings, report) = attach_full();

        let bindable_fields = schema::descriptors()
            .iter()
            .filter(|descriptor| {
                descriptor.ui_name.is_some()
                    && descriptor.kind() != FieldKind::Text
            })
            .count();
        assert_eq!(report.bound, bindable_fields + ScriptKind::ALL.len() + 1);
        assert!(report.missing.is_empty());

        for descriptor in schema::descriptors() {
            let Some(ui_name) = descriptor.ui_name else {
                continue;
            };
            if descriptor.kind() == FieldKind::Text {
                continue;
            }
            assert_eq!(
                surface.values.get(ui_name),
                Some(&settings.value(descriptor.id)),
                "pushed value mismatch for {ui_name}"
            );
        }
        for kind in ScriptKind::ALL {
            assert_eq!(
                surface.scripts.get(kind.ui_name()).map(String::as_str),
                Some(settings.script(kind))
            );
        }
        assert_eq!(surface.shrink, Some(ShrinkQuality::Fast));
    }

    #[test]
    fn given_text_fields_when_attached_then_they_stay_unbound() {
        let (binder, surface, mut settings, report) = attach_full();
        let before = settings.clone();

        assert!(!surface.values.contains_key("Hardware.PortName"));
        assert!(
            !surface
                .values
                .contains_key("Slicing.AltInfillLayersText")
        );
        assert!(
            !report
                .missing
                .contains(&String::from("Hardware.PortName"))
        );

        assert!(!binder.control_changed(
            &mut settings,
            "Hardware.PortName",
            ControlEvent::Value(SettingValue::Text(String::from(
                "/dev/ttyACM0"
            ))),
        ));
        assert!(!binder.control_changed(
            &mut settings,
            "Slicing.AltInfillLayersText",
            ControlEvent::Value(SettingValue::Text(String::from("1,2"))),
        ));

        assert_eq!(settings, before);
    }

    #[test]
    fn given_full_surface_when_attached_then_ranges_are_configured() {
        let (_, surface, _, _) = attach_full();

        assert_eq!(
            surface.ranges.get("Slicing.ShellCount"),
            Some(&(0.0, 100.0, 1.0, 5.0))
        );
        assert_eq!(
            surface.ranges.get("Slicing.InfillDistance"),
            Some(&(0.0, 10.0, 0.1, 1.0))
        );
    }

    #[test]
    fn given_incomplete_surface_when_attached_then_rest_still_binds() {
        let mut binder = UiBinder::new();
        let mut surface = FakeSurface::with_every_control();
        surface.known.remove("Slicing.ShellCount");
        surface.known.remove(SHRINK_CONTROL);
        let mut settings = Settings::default();

        let report = binder.attach(&mut surface, &settings);

        assert!(
            report
                .missing
                .contains(&String::from("Slicing.ShellCount"))
        );
        assert!(report.missing.contains(&String::from(SHRINK_CONTROL)));
        assert!(binder.control_changed(
            &mut settings,
            "Hardware.KeepLines",
            ControlEvent::Value(SettingValue::Int(500)),
        ));
        assert!(!binder.control_changed(
            &mut settings,
            "Slicing.ShellCount",
            ControlEvent::Value(SettingValue::Int(2)),
        ));
    }

    #[test]
    fn given_bound_controls_when_edited_then_fields_update() {
        let (binder, _, mut settings, _) = attach_full();

        assert!(binder.control_changed(
            &mut settings,
            "Slicing.ShellCount",
            ControlEvent::Value(SettingValue::Int(3)),
        ));
        assert!(binder.control_changed(
            &mut settings,
            "Hardware.SerialSpeed",
            ControlEvent::Value(SettingValue::Int(115200)),
        ));
        assert!(binder.control_changed(
            &mut settings,
            "txt_gcode_next_layer",
            ControlEvent::Script(String::from("M106\n")),
        ));
        assert!(binder.control_changed(
            &mut settings,
            SHRINK_CONTROL,
            ControlEvent::Shrink(ShrinkQuality::Precise),
        ));

        assert_eq!(settings.slicing.shell_count, 3);
        assert_eq!(settings.hardware.serial_speed, 115200);
        assert_eq!(settings.script(ScriptKind::Layer), "M106\n");
        assert_eq!(settings.slicing.shrink_quality, ShrinkQuality::Precise);
    }

    #[test]
    fn given_mismatched_edit_when_applied_then_field_keeps_its_value() {
        let (binder, _, mut settings, _) = attach_full();
        let before = settings.clone();

        assert!(!binder.control_changed(
            &mut settings,
            "Slicing.ShellCount",
            ControlEvent::Value(SettingValue::Bool(true)),
        ));
        assert!(!binder.control_changed(
            &mut settings,
            "txt_gcode_start",
            ControlEvent::Value(SettingValue::Text(String::from("G28"))),
        ));
        assert!(!binder.control_changed(
            &mut settings,
            "no_such_control",
            ControlEvent::Value(SettingValue::Int(1)),
        ));

        assert_eq!(settings, before);
    }
}
