//! Scene model and editing engine for the animation scene editor.
//!
//! This crate owns the authoritative in-memory scene that the editor surface
//! manipulates: the object model, the mapping between on-screen canvas pixels
//! and the animation engine's logical coordinate space, and the mutation
//! protocol (create, select, move, update, delete). The host presentation
//! layer forwards already-resolved pointer events to the
//! [`controller::InteractionController`] and re-renders from the scene and
//! selection it exposes. Rendering and video generation happen elsewhere; the
//! serialized scene document produced by [`serializer`] is their input.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Drop/click events to store operations |
//! | [`input`] | Drop event wire type and validation |
//! | [`store`] | Active scene, selection, and mutation operations |
//! | [`scene`] | Scene, settings, metadata, and object types |
//! | [`factory`] | Object construction with per-kind defaults |
//! | [`props`] | Typed per-kind property records |
//! | [`serializer`] | JSON document encoding and decoding |
//! | [`transform`] | Canvas pixel to logical unit conversions |
//! | [`sizing`] | Aspect-preserving canvas size from container size |
//! | [`config`] | Environment-driven editor configuration |
//! | [`consts`] | Shared numeric constants (logical extent, caps, defaults) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod factory;
pub mod input;
pub mod props;
pub mod scene;
pub mod serializer;
pub mod sizing;
pub mod store;
pub mod transform;
