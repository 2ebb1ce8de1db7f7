/// A catalog plan. Each plan maps to one Atlas instance size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServicePlan {
    id: String,
    name: String,
    description: String,
    instance_size: String,
}

impl ServicePlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        instance_size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            instance_size: instance_size.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instance_size(&self) -> &str {
        &self.instance_size
    }
}
