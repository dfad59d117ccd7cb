pub mod control_planes;
pub mod format;
pub mod table;

use serde::Serialize;

use crate::document::Document;

pub use control_planes::ViewOptions;

pub fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_pretty_yaml<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

pub fn render_document(document: &Document, opts: &ViewOptions) -> String {
    match document {
        Document::ControlPlane(control_plane) => {
            control_planes::render_control_plane(control_plane, opts)
        }
        Document::Configuration(configuration) => {
            control_planes::render_configuration(configuration, opts)
        }
        Document::Response(response) => control_planes::render_response(response, opts),
        Document::List(list) => control_planes::render_list(list, opts),
        Document::CreateParams(params) => control_planes::render_create_parameters(params, opts),
    }
}
