// OpenStack Rust SDK for Object Storage and Identity
// Copyright 2025 The OpenStack Rust SDK Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Types of the identity limits API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A project or domain specific override of a registered limit.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Limit {
    pub id: String,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub domain_id: Option<String>,
    pub service_id: String,
    #[serde(default)]
    pub description: Option<String>,
    pub resource_name: String,
    pub resource_limit: i64,
    #[serde(default)]
    pub links: HashMap<String, serde_json::Value>,
}

/// A limit to create. Exactly one of `project_id` and `domain_id` is
/// expected by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateLimit {
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    pub resource_name: String,
    pub resource_limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Limit enforcement model configured in the deployment, e.g. `flat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EnforcementModel {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub(crate) struct CreateLimitsBody<'a> {
    pub(crate) limits: &'a [CreateLimit],
}

#[derive(Default, Serialize)]
pub(crate) struct LimitUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) resource_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct UpdateLimitBody {
    pub(crate) limit: LimitUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_with_null_scope() {
        let limit: Limit = serde_json::from_str(
            r#"{
                "id": "25a04c7a065c430590881c646cdcdd58",
                "service_id": "9408080f1970482aa0e38bc2d4ea34b7",
                "region_id": null,
                "project_id": "3a705b9f56bb439381b43c4fe59dccce",
                "domain_id": null,
                "resource_name": "snapshot",
                "resource_limit": 5,
                "description": "Number of snapshots for project 3a705b9f56bb439381b43c4fe59dccce",
                "links": {"self": "http://10.3.150.25/identity/v3/limits/25a04c7a065c430590881c646cdcdd58"}
            }"#,
        )
        .unwrap();
        assert_eq!(limit.region_id, None);
        assert_eq!(limit.resource_limit, 5);
        assert!(limit.links.contains_key("self"));
    }

    #[test]
    fn test_create_limit_skips_unset_fields() {
        let body = CreateLimitsBody {
            limits: &[CreateLimit {
                service_id: "svc".into(),
                project_id: Some("p".into()),
                resource_name: "volume".into(),
                resource_limit: 11,
                ..Default::default()
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"limits": [{
                "service_id": "svc",
                "project_id": "p",
                "resource_name": "volume",
                "resource_limit": 11
            }]})
        );
    }
}
