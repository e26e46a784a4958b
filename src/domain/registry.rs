use std::collections::HashMap;

use rust_mcp_sdk::schema::Tool;
use thiserror::Error;

use super::{
    catalog::{self, ToolDescriptor},
    routes::{ToolRoute, ROUTES},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool '{0}' is advertised but has no route")]
    MissingRoute(String),
    #[error("route '{0}' has no tool descriptor")]
    MissingDescriptor(String),
    #[error("tool '{0}' is declared more than once")]
    DuplicateTool(String),
    #[error("tool '{0}' has an invalid input schema")]
    InvalidSchema(String),
}

#[derive(Debug, Clone)]
pub struct RegisteredTool {
    pub descriptor: ToolDescriptor,
    pub route: ToolRoute,
    /// The descriptor as advertised by `tools/list`.
    pub tool: Tool,
}

/// Descriptor and route for every tool, checked against each other at
/// startup so that no advertised tool can be unroutable.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_parts(catalog::descriptors(), ROUTES)
    }

    pub fn from_parts(
        descriptors: Vec<ToolDescriptor>,
        routes: &[ToolRoute],
    ) -> Result<Self, RegistryError> {
        let mut route_by_name = HashMap::with_capacity(routes.len());
        for route in routes {
            if route_by_name.insert(route.tool, *route).is_some() {
                return Err(RegistryError::DuplicateTool(route.tool.to_string()));
            }
        }

        let mut tools = Vec::with_capacity(descriptors.len());
        let mut index = HashMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let name = descriptor.name;
            if index.contains_key(name) {
                return Err(RegistryError::DuplicateTool(name.to_string()));
            }
            let route = route_by_name
                .remove(name)
                .ok_or_else(|| RegistryError::MissingRoute(name.to_string()))?;
            let tool = descriptor
                .to_tool()
                .map_err(|_| RegistryError::InvalidSchema(name.to_string()))?;

            index.insert(name, tools.len());
            tools.push(RegisteredTool {
                descriptor,
                route,
                tool,
            });
        }

        if let Some(orphan) = routes.iter().find(|route| route_by_name.contains_key(route.tool)) {
            return Err(RegistryError::MissingDescriptor(orphan.tool.to_string()));
        }

        Ok(Self { tools, index })
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|position| &self.tools[*position])
    }

    /// Registered tools in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
