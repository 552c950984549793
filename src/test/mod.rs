//! Reflected fixture types shared by the unit tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};

use crate::typesystem::{Object, Reflect, TypeBuilder, TypeInfo};

// ------------------------------------------------------------------------------------------------
// Plain classes
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct Person {
    pub name: String,
    pub age: u32,
    email: String,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Person {
            name: name.to_string(),
            age,
            email: String::new(),
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn email(&self) -> String {
        self.email.clone()
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Reflect for Person {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("name", |p| &p.name, |p| &mut p.name)
            .field("age", |p| &p.age, |p| &mut p.age)
            .property("email", Person::email, Person::set_email)
            .readonly_property("initials", Person::initials)
            .default_constructor()
            .build()
    }
}

/// Shares member names with [`Person`], but not always the kind or the case
#[derive(Clone, Debug, Default)]
pub struct PersonCard {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub initials: String,
}

impl Reflect for PersonCard {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("name", |c| &c.name, |c| &mut c.name)
            .property("age", |c: &PersonCard| c.age, |c: &mut PersonCard, v| c.age = v)
            .property(
                "email",
                |c: &PersonCard| c.email.clone(),
                |c: &mut PersonCard, v| c.email = v,
            )
            .property(
                "Initials",
                |c: &PersonCard| c.initials.clone(),
                |c: &mut PersonCard, v| c.initials = v,
            )
            .default_constructor()
            .build()
    }
}

/// Has no default constructor
#[derive(Clone, Debug)]
pub struct Opaque {
    pub id: u32,
}

impl Reflect for Opaque {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("id", |o| &o.id, |o| &mut o.id)
            .build()
    }
}

// ------------------------------------------------------------------------------------------------
// Collections
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct Source {
    pub name: String,
    pub tags: Vec<String>,
}

impl Reflect for Source {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .property(
                "name",
                |s: &Source| s.name.clone(),
                |s: &mut Source, v| s.name = v,
            )
            .property(
                "tags",
                |s: &Source| s.tags.clone(),
                |s: &mut Source, v| s.tags = v,
            )
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wrapper {
    pub value: String,
}

impl Wrapper {
    pub fn new(value: &str) -> Self {
        Wrapper {
            value: value.to_string(),
        }
    }
}

impl Reflect for Wrapper {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .property(
                "value",
                |w: &Wrapper| w.value.clone(),
                |w: &mut Wrapper, v| w.value = v,
            )
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dest {
    pub name: String,
    pub tags: Vec<Wrapper>,
}

impl Reflect for Dest {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .property("name", |d: &Dest| d.name.clone(), |d: &mut Dest, v| d.name = v)
            .property("tags", |d: &Dest| d.tags.clone(), |d: &mut Dest, v| d.tags = v)
            .default_constructor()
            .build()
    }
}

/// Like [`Dest`], but keeps the source element type
#[derive(Clone, Debug, Default)]
pub struct DestPlain {
    pub name: String,
    pub tags: Vec<String>,
}

impl Reflect for DestPlain {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .property(
                "name",
                |d: &DestPlain| d.name.clone(),
                |d: &mut DestPlain, v| d.name = v,
            )
            .property(
                "tags",
                |d: &DestPlain| d.tags.clone(),
                |d: &mut DestPlain, v| d.tags = v,
            )
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Inventory {
    pub label: String,
    pub counts: HashMap<String, u32>,
}

impl Inventory {
    pub fn sample() -> Self {
        let mut counts = HashMap::new();
        counts.insert("bolts".to_string(), 12);
        counts.insert("nuts".to_string(), 40);
        Inventory {
            label: "shelf".to_string(),
            counts,
        }
    }
}

impl Reflect for Inventory {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("label", |i| &i.label, |i| &mut i.label)
            .property(
                "counts",
                |i: &Inventory| i.counts.clone(),
                |i: &mut Inventory, v| i.counts = v,
            )
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct InventoryDto {
    pub label: String,
    pub counts: HashMap<String, u32>,
}

impl Reflect for InventoryDto {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("label", |i| &i.label, |i| &mut i.label)
            .property(
                "counts",
                |i: &InventoryDto| i.counts.clone(),
                |i: &mut InventoryDto, v| i.counts = v,
            )
            .default_constructor()
            .build()
    }
}

// ------------------------------------------------------------------------------------------------
// Interfaces
// ------------------------------------------------------------------------------------------------

pub trait Shape: Object {
    fn area(&self) -> f64;
}

#[derive(Clone, Debug, Default)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Reflect for Circle {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("radius", |c| &c.radius, |c| &mut c.radius)
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Square {
    pub side: f64,
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Reflect for Square {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("side", |s| &s.side, |s| &mut s.side)
            .default_constructor()
            .build()
    }
}

/// The source-side shape, unrelated to [`Shape`]
#[derive(Clone, Debug, Default)]
pub struct CircleModel {
    pub radius: f64,
}

impl Reflect for CircleModel {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("radius", |c| &c.radius, |c| &mut c.radius)
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub shape: CircleModel,
    backdrop: Option<CircleModel>,
}

impl Scene {
    pub fn with_radius(radius: f64) -> Self {
        Scene {
            shape: CircleModel { radius },
            backdrop: None,
        }
    }

    pub fn set_backdrop(&mut self, radius: f64) {
        self.backdrop = Some(CircleModel { radius });
    }
}

impl Reflect for Scene {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("shape", |s| &s.shape, |s| &mut s.shape)
            .property(
                "backdrop",
                |s: &Scene| s.backdrop.clone(),
                |s: &mut Scene, v| s.backdrop = v,
            )
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Default)]
pub struct SceneDto {
    pub shape: Option<Arc<dyn Shape>>,
    pub backdrop: Option<Arc<dyn Shape>>,
}

impl Reflect for SceneDto {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("shape", |s| &s.shape, |s| &mut s.shape)
            .property(
                "backdrop",
                |s: &SceneDto| s.backdrop.clone(),
                |s: &mut SceneDto, v| s.backdrop = v,
            )
            .default_constructor()
            .build()
    }
}

pub trait Link: Object {
    /// Number of nodes from this one to the end of the chain
    fn depth(&self) -> usize;
}

/// A singly linked chain, nested through an interface member
#[derive(Clone, Default)]
pub struct Chain {
    pub id: u32,
    pub next: Option<Arc<dyn Link>>,
}

impl Chain {
    pub fn of_depth(depth: u32) -> Self {
        let mut chain = Chain { id: 0, next: None };
        for id in 1..depth {
            chain = Chain {
                id,
                next: Some(Arc::new(chain)),
            };
        }
        chain
    }
}

impl Link for Chain {
    fn depth(&self) -> usize {
        1 + self.next.as_ref().map_or(0, |next| next.depth())
    }
}

impl Reflect for Chain {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("id", |c| &c.id, |c| &mut c.id)
            .field("next", |c| &c.next, |c| &mut c.next)
            .default_constructor()
            .build()
    }
}

// ------------------------------------------------------------------------------------------------
// Static members
// ------------------------------------------------------------------------------------------------

static SETTINGS_LEVEL: AtomicU32 = AtomicU32::new(0);
static SETTINGS_DTO_LEVEL: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub name: String,
}

impl Settings {
    pub fn set_level(level: u32) {
        SETTINGS_LEVEL.store(level, Ordering::SeqCst);
    }
}

impl Reflect for Settings {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("name", |s| &s.name, |s| &mut s.name)
            .static_property(
                "level",
                || SETTINGS_LEVEL.load(Ordering::SeqCst),
                |level| SETTINGS_LEVEL.store(level, Ordering::SeqCst),
            )
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SettingsDto {
    pub name: String,
}

impl SettingsDto {
    pub fn level() -> u32 {
        SETTINGS_DTO_LEVEL.load(Ordering::SeqCst)
    }
}

impl Reflect for SettingsDto {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("name", |s| &s.name, |s| &mut s.name)
            .static_property(
                "level",
                || SETTINGS_DTO_LEVEL.load(Ordering::SeqCst),
                |level| SETTINGS_DTO_LEVEL.store(level, Ordering::SeqCst),
            )
            .default_constructor()
            .build()
    }
}

// ------------------------------------------------------------------------------------------------
// Same simple name, different modules
// ------------------------------------------------------------------------------------------------

pub mod v1 {
    use crate::typesystem::{Reflect, TypeBuilder, TypeInfo};

    #[derive(Clone, Debug, Default)]
    pub struct Record {
        pub id: u32,
    }

    impl Reflect for Record {
        fn describe() -> TypeInfo {
            TypeBuilder::<Self>::class()
                .field("id", |r| &r.id, |r| &mut r.id)
                .default_constructor()
                .build()
        }
    }

    impl_object!(Record);
}

pub mod v2 {
    use crate::typesystem::{Reflect, TypeBuilder, TypeInfo};

    #[derive(Clone, Debug, Default)]
    pub struct Record {
        pub id: u32,
        pub label: String,
    }

    impl Reflect for Record {
        fn describe() -> TypeInfo {
            TypeBuilder::<Self>::class()
                .field("id", |r| &r.id, |r| &mut r.id)
                .field("label", |r| &r.label, |r| &mut r.label)
                .default_constructor()
                .build()
        }
    }

    impl_object!(Record);
}

#[derive(Clone, Debug, Default)]
pub struct RecordDto {
    pub id: u32,
    pub label: String,
}

impl Reflect for RecordDto {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("id", |r| &r.id, |r| &mut r.id)
            .field("label", |r| &r.label, |r| &mut r.label)
            .default_constructor()
            .build()
    }
}

impl_object!(
    Person,
    PersonCard,
    Opaque,
    Source,
    Wrapper,
    Dest,
    DestPlain,
    Inventory,
    InventoryDto,
    Circle,
    Square,
    CircleModel,
    Scene,
    SceneDto,
    Chain,
    Settings,
    SettingsDto,
    RecordDto,
);

interface!(Shape => Circle, Square);
interface!(crate::test::Link => Chain);
