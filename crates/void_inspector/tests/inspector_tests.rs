//! Integration tests for void_inspector

use std::sync::Arc;

use approx::assert_relative_eq;
use void_core::{
    FieldInfo, FieldType, ResourceCache, ResourceHandle, ResourceRef, SerializableObject,
    SharedObject, TypeInfo, TypeRegistry, Value, Vector3Distribution,
};
use void_inspector::gui::{GuiEvent, GuiValue, WidgetKind};
use void_inspector::*;
use void_math::{Color, Radian, Vec3};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn light_types() -> TypeRegistry {
    let mut types = TypeRegistry::new();
    types
        .register(
            TypeInfo::new("Component")
                .with_field(FieldInfo::new("enabled", FieldType::Bool)),
        )
        .unwrap()
        .register(
            TypeInfo::new("Light")
                .with_base("Component")
                .with_field(FieldInfo::new("intensity", FieldType::Float).with_range(0.0, 10.0, false))
                .with_field(FieldInfo::new("shadow_samples", FieldType::Int))
                .with_field(FieldInfo::new("color", FieldType::Color).hdr())
                .with_field(
                    FieldInfo::new("mode", FieldType::Enum)
                        .with_variant("Directional", 0)
                        .with_variant("Point", 1)
                        .with_variant("Spot", 2),
                )
                .with_field(FieldInfo::new("spot_angle", FieldType::Object).with_type_name("Radian")),
        )
        .unwrap();
    types
}

fn light() -> SharedObject {
    SerializableObject::new("Light")
        .with_field("enabled", true)
        .with_field("intensity", 1.0f32)
        .with_field("shadow_samples", 4i32)
        .with_field("color", Color::WHITE)
        .with_field("mode", 1u64)
        .with_field("spot_angle", Radian(std::f32::consts::FRAC_PI_2))
        .into_shared()
}

fn inspect(target: &SharedObject, ctx: &InspectableContext) -> Box<dyn Inspector> {
    let type_name = target.read().type_name().to_string();
    let mut inspector = ctx.utility().get_inspector(&type_name, ctx.types());
    inspector.initialize(target, ctx);
    inspector
}

#[test]
fn test_fields_follow_declaration_order() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let inspector = inspect(&target, &ctx);

    assert_eq!(inspector.lifecycle(), InspectorLifecycle::Initialized);
    let labels: Vec<_> = inspector.layout().labels().collect();
    assert_eq!(
        labels,
        ["enabled", "intensity", "shadow_samples", "color", "mode", "spot_angle"]
    );
    let kinds: Vec<_> = inspector.layout().elements().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [
            WidgetKind::Toggle,
            WidgetKind::FloatField,
            WidgetKind::IntField,
            WidgetKind::ColorField,
            WidgetKind::ListBox,
            WidgetKind::FloatField,
        ]
    );
}

#[test]
fn test_refresh_reflects_property_once() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);

    assert_eq!(inspector.refresh(false), InspectableState::NotModified);
    assert_eq!(inspector.widget_value("intensity"), Some(GuiValue::Float(1.0)));
    assert_eq!(inspector.widget_value("mode"), Some(GuiValue::Enum(1)));

    target.write().set_field("intensity", 2.5f32);
    assert_eq!(inspector.refresh(false), InspectableState::NotModified);
    assert_eq!(inspector.widget_value("intensity"), Some(GuiValue::Float(2.5)));
    assert_eq!(inspector.refresh(false), InspectableState::NotModified);
    assert_eq!(ctx.undo_redo().undo_count(), 0);
}

#[test]
fn test_gesture_commits_one_undo_entry() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);
    inspector.refresh(false);

    assert!(inspector.handle_event("intensity", GuiEvent::focus_gained()));
    for value in [1.5f32, 2.0, 2.5] {
        inspector.handle_event("intensity", GuiEvent::changed(value));
    }

    // Live writes are visible before the gesture ends
    assert_eq!(target.read().field("intensity"), Some(&Value::Float(2.5)));
    assert_eq!(inspector.refresh(false), InspectableState::ModifyInProgress);
    assert_eq!(ctx.undo_redo().undo_count(), 0);
    assert!(ctx.has_open_transaction());

    inspector.handle_event("intensity", GuiEvent::focus_lost());
    assert!(!ctx.has_open_transaction());
    assert_eq!(ctx.undo_redo().undo_count(), 1);
    assert_eq!(inspector.refresh(false), InspectableState::Modified);
    assert_eq!(inspector.refresh(false), InspectableState::NotModified);

    ctx.undo().unwrap();
    assert_eq!(target.read().field("intensity"), Some(&Value::Float(1.0)));
    inspector.refresh(false);
    assert_eq!(inspector.widget_value("intensity"), Some(GuiValue::Float(1.0)));

    ctx.redo().unwrap();
    assert_eq!(target.read().field("intensity"), Some(&Value::Float(2.5)));
}

#[test]
fn test_enter_confirms_and_reopens() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);

    inspector.handle_event("shadow_samples", GuiEvent::focus_gained());
    inspector.handle_event("shadow_samples", GuiEvent::changed(8i32));
    inspector.handle_event("shadow_samples", GuiEvent::confirmed());

    assert_eq!(ctx.undo_redo().undo_count(), 1);
    assert!(ctx.has_open_transaction());
    assert_eq!(inspector.refresh(false), InspectableState::Modified);

    inspector.handle_event("shadow_samples", GuiEvent::changed(16i32));
    inspector.handle_event("shadow_samples", GuiEvent::focus_lost());
    assert_eq!(ctx.undo_redo().undo_count(), 2);

    ctx.undo().unwrap();
    assert_eq!(target.read().field("shadow_samples"), Some(&Value::Int(8)));
    ctx.undo().unwrap();
    assert_eq!(target.read().field("shadow_samples"), Some(&Value::Int(4)));
}

#[test]
fn test_focused_widget_is_not_overwritten() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);
    inspector.refresh(false);

    inspector.handle_event("intensity", GuiEvent::focus_gained());
    inspector.handle_event("intensity", GuiEvent::changed(7.0f32));
    target.write().set_field("intensity", 9.0f32);

    inspector.refresh(false);
    assert_eq!(inspector.widget_value("intensity"), Some(GuiValue::Float(7.0)));

    inspector.refresh(true);
    assert_eq!(inspector.widget_value("intensity"), Some(GuiValue::Float(9.0)));
}

#[test]
fn test_radian_round_trips_through_degrees() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);
    inspector.refresh(false);

    let degrees = |inspector: &Box<dyn Inspector>| match inspector.widget_value("spot_angle") {
        Some(GuiValue::Float(d)) => d,
        other => panic!("unexpected widget value {:?}", other),
    };
    assert_relative_eq!(degrees(&inspector), 90.0, epsilon = 1e-3);

    inspector.handle_event("spot_angle", GuiEvent::focus_gained());
    inspector.handle_event("spot_angle", GuiEvent::changed(30.0f32));
    inspector.handle_event("spot_angle", GuiEvent::focus_lost());

    match target.read().field("spot_angle") {
        Some(Value::Radian(r)) => assert_relative_eq!(r.0, std::f32::consts::FRAC_PI_6, epsilon = 1e-6),
        other => panic!("unexpected stored value {:?}", other),
    }

    inspector.refresh(true);
    assert_relative_eq!(degrees(&inspector), 30.0, epsilon = 1e-3);

    inspector.handle_event("spot_angle", GuiEvent::changed(90.0f32));
    let stored = target.read().field("spot_angle").cloned();
    match stored {
        Some(Value::Radian(r)) => assert_relative_eq!(r.0, 1.5708, epsilon = 1e-4),
        other => panic!("unexpected stored value {:?}", other),
    }
}

#[test]
fn test_enum_ordinal_is_lossless() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);

    let ordinal = u64::MAX - 3;
    inspector.handle_event("mode", GuiEvent::changed(ordinal));

    assert_eq!(target.read().field("mode"), Some(&Value::Enum(ordinal)));
    assert_eq!(inspector.refresh(false), InspectableState::Modified);
    assert_eq!(inspector.widget_value("mode"), Some(GuiValue::Enum(ordinal)));
    assert_eq!(ctx.undo_redo().undo_count(), 1);
}

#[derive(Default)]
struct SummaryInspector {
    lifecycle: InspectorLifecycle,
    layout: void_inspector::gui::GuiLayout,
}

impl Inspector for SummaryInspector {
    fn name(&self) -> &str {
        "SummaryInspector"
    }

    fn lifecycle(&self) -> InspectorLifecycle {
        self.lifecycle
    }

    fn initialize(&mut self, _target: &SharedObject, _context: &InspectableContext) {
        self.lifecycle = InspectorLifecycle::Initialized;
    }

    fn refresh(&mut self, _force: bool) -> InspectableState {
        InspectableState::NotModified
    }

    fn destroy(&mut self) {
        self.lifecycle = InspectorLifecycle::Destroyed;
    }

    fn layout(&self) -> &void_inspector::gui::GuiLayout {
        &self.layout
    }
}

#[test]
fn test_custom_inspector_wins_over_generic() {
    init();
    let mut utility = InspectorUtility::with_defaults();
    utility.register_inspector("Component", || Box::new(SummaryInspector::default()));
    let ctx = InspectableContext::new()
        .with_types(light_types())
        .with_utility(utility);

    assert!(ctx.utility().has_custom_inspector("Light", ctx.types()));
    let target = light();
    let inspector = inspect(&target, &ctx);
    assert_eq!(inspector.name(), "SummaryInspector");
    assert_eq!(inspector.lifecycle(), InspectorLifecycle::Initialized);

    let other = ctx.utility().get_inspector("Camera", ctx.types());
    assert_eq!(other.name(), "GenericInspector");
}

#[test]
fn test_nested_object_expands_and_persists() {
    init();
    let ctx = InspectableContext::new();
    let target = SerializableObject::new("Node")
        .with_field(
            "transform",
            SerializableObject::new("Transform")
                .with_field("scale", 1.0f32)
                .with_field("name", "root"),
        )
        .with_field("visible", true)
        .into_shared();

    let mut inspector = inspect(&target, &ctx);
    inspector.refresh(false);
    let labels: Vec<_> = inspector.layout().labels().collect();
    assert_eq!(labels, ["transform", "visible"]);

    inspector.handle_event("transform", GuiEvent::Toggled(true));
    inspector.refresh(false);
    let labels: Vec<_> = inspector.layout().labels().collect();
    assert_eq!(labels, ["transform", "scale", "name", "visible"]);
    let scale = &inspector.layout().elements()[1];
    assert_eq!(scale.depth, 1);
    assert_eq!(scale.title_width, 95);

    inspector.handle_event("transform/scale", GuiEvent::focus_gained());
    inspector.handle_event("transform/scale", GuiEvent::changed(2.0f32));
    inspector.handle_event("transform/scale", GuiEvent::focus_lost());
    assert_eq!(inspector.refresh(false), InspectableState::Modified);
    assert_eq!(
        target.read().resolve(&["transform", "scale"][..]),
        Some(&Value::Float(2.0))
    );

    // A rebuilt inspector remembers the foldout
    let mut rebuilt = inspect(&target, &ctx);
    rebuilt.refresh(false);
    assert_eq!(rebuilt.layout().len(), 4);
    assert_eq!(rebuilt.widget_value("transform/name"), Some(GuiValue::Text("root".into())));

    rebuilt.handle_event("transform", GuiEvent::Toggled(false));
    rebuilt.refresh(false);
    assert_eq!(rebuilt.layout().len(), 2);

    ctx.undo().unwrap();
    assert_eq!(
        target.read().resolve(&["transform", "scale"][..]),
        Some(&Value::Float(1.0))
    );
}

#[test]
fn test_resource_reference_is_resolved() {
    init();
    let grass = ResourceHandle::new("uuid-grass", "Grass", "Texture");
    let cache = ResourceCache::new();
    cache.insert(grass.clone());
    let ctx = InspectableContext::new().with_resources(Arc::new(cache));

    let target = SerializableObject::new("Material")
        .with_field("albedo", None::<ResourceHandle>)
        .into_shared();
    let mut inspector = inspect(&target, &ctx);

    inspector.handle_event("albedo", GuiEvent::changed(ResourceRef::new("uuid-grass")));
    assert_eq!(target.read().field("albedo"), Some(&Value::Resource(Some(grass.clone()))));
    assert_eq!(inspector.refresh(false), InspectableState::Modified);
    assert_eq!(
        inspector.widget_value("albedo"),
        Some(GuiValue::Resource(ResourceRef::new("uuid-grass")))
    );

    inspector.handle_event("albedo", GuiEvent::changed(ResourceRef::new("uuid-missing")));
    assert_eq!(target.read().field("albedo"), Some(&Value::Resource(None)));
    assert_eq!(ctx.undo_redo().undo_count(), 2);
}

#[test]
fn test_distribution_focus_by_path() {
    init();
    let ctx = InspectableContext::new();
    let target = SerializableObject::new("Emitter")
        .with_field(
            "velocity",
            Vector3Distribution::RandomRange { min: Vec3::ZERO, max: Vec3::ONE },
        )
        .into_shared();
    let mut inspector = inspect(&target, &ctx);
    inspector.refresh(false);

    assert_eq!(inspector.name(), "GenericInspector");
    let kinds: Vec<_> = inspector.layout().elements().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [WidgetKind::Vector3DistributionField]);
    assert_eq!(
        inspector.widget_value("velocity"),
        Some(GuiValue::Distribution(Vector3Distribution::RandomRange { min: Vec3::ZERO, max: Vec3::ONE }))
    );

    assert!(inspector.set_focus("velocity.max.Z"));
    assert_eq!(
        ctx.open_transaction(),
        Some(("velocity".to_string(), Some("max.Z".to_string())))
    );

    inspector.handle_event("velocity", GuiEvent::sub_changed("max.Z", 5.0f32));
    inspector.handle_event("velocity", GuiEvent::sub_focus_lost("max.Z"));
    assert_eq!(ctx.undo_redo().undo_count(), 1);
    assert_eq!(
        target.read().field("velocity"),
        Some(&Value::Vector3Distribution(Vector3Distribution::RandomRange {
            min: Vec3::ZERO,
            max: Vec3::new(1.0, 1.0, 5.0),
        }))
    );

    assert!(!inspector.set_focus("acceleration"));
}

#[test]
fn test_expired_target_is_silent() {
    init();
    let ctx = InspectableContext::new().with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);
    inspector.refresh(false);
    drop(target);

    assert_eq!(inspector.refresh(true), InspectableState::NotModified);
    inspector.handle_event("intensity", GuiEvent::focus_gained());
    inspector.handle_event("intensity", GuiEvent::changed(3.0f32));
    inspector.handle_event("intensity", GuiEvent::focus_lost());
    assert_eq!(inspector.refresh(false), InspectableState::NotModified);
    assert_eq!(ctx.undo_redo().undo_count(), 0);
}

#[test]
fn test_inspector_lifecycle() {
    init();
    let ctx = InspectableContext::new();
    let target = light();

    let mut inspector = GenericInspector::new();
    assert_eq!(inspector.lifecycle(), InspectorLifecycle::Uninitialized);
    assert_eq!(inspector.refresh(true), InspectableState::NotModified);

    inspector.initialize(&target, &ctx);
    assert_eq!(inspector.fields().len(), 6);
    inspector.initialize(&target, &ctx);
    assert_eq!(inspector.fields().len(), 6);

    inspector.destroy();
    assert_eq!(inspector.lifecycle(), InspectorLifecycle::Destroyed);
    assert!(inspector.layout().is_empty());
    assert_eq!(inspector.refresh(true), InspectableState::NotModified);
}

#[test]
fn test_settings_limit_undo_history() {
    init();
    let settings = InspectorSettings {
        undo_capacity: 2,
        ..Default::default()
    };
    let ctx = InspectableContext::with_settings(settings).with_types(light_types());
    let target = light();
    let mut inspector = inspect(&target, &ctx);

    for color in [Color::RED, Color::GREEN, Color::BLUE] {
        inspector.handle_event("color", GuiEvent::changed(color));
    }
    assert_eq!(ctx.undo_redo().undo_count(), 2);
    assert_eq!(ctx.undo_redo().undo_description(), Some("Change color"));
}

#[test]
fn test_plain_text_uses_custom_inspector() {
    init();
    let ctx = InspectableContext::new();
    let text = SerializableObject::new("PlainText")
        .with_field("text", "hello")
        .into_shared();

    let mut inspector = inspect(&text, &ctx);
    assert_eq!(inspector.name(), "PlainTextInspector");
    assert_eq!(inspector.refresh(true), InspectableState::NotModified);
}
