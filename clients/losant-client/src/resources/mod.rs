// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Resource action sets
//!
//! Each module declares its actions as `static` [`Action`] tables and a
//! borrowed handle whose methods run them through [`crate::Client`].

use losant_binding::Action;

pub mod application;
pub mod application_keys;
pub mod applications;
pub mod dashboards;
pub mod device;
pub mod org;
pub mod solution_user;
pub mod solution_users;

pub use application::Application;
pub use application_keys::ApplicationKeys;
pub use applications::Applications;
pub use dashboards::Dashboards;
pub use device::Device;
pub use org::Org;
pub use solution_user::SolutionUser;
pub use solution_users::SolutionUsers;

/// Every action this client ships, grouped by resource
pub fn all_actions() -> impl Iterator<Item = &'static Action> {
    [
        application::ACTIONS,
        application_keys::ACTIONS,
        applications::ACTIONS,
        dashboards::ACTIONS,
        device::ACTIONS,
        org::ACTIONS,
        solution_user::ACTIONS,
        solution_users::ACTIONS,
    ]
    .into_iter()
    .flatten()
    .copied()
}

/// Look up an action by resource and action name, e.g. `("device", "get_state")`
pub fn find(resource: &str, name: &str) -> Option<&'static Action> {
    all_actions().find(|action| action.resource == resource && action.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_table_is_well_formed() {
        for action in all_actions() {
            assert_eq!(action.validate(), Ok(()), "{}", action);
        }
    }

    #[test]
    fn action_names_are_unique() {
        let mut seen = HashSet::new();
        for action in all_actions() {
            assert!(seen.insert(action.to_string()), "duplicate {}", action);
        }
        assert_eq!(seen.len(), 34);
    }

    #[test]
    fn domain_scope_matches_resource() {
        let unscoped = ["applications", "dashboards", "org"];
        for action in all_actions() {
            assert_eq!(
                action.domain_scoped,
                !unscoped.contains(&action.resource),
                "{}",
                action
            );
        }
    }

    #[test]
    fn find_by_name() {
        let action = find("device", "get_state");
        assert_eq!(
            action.map(|a| a.path),
            Some("/applications/{applicationId}/devices/{deviceId}/state")
        );
        assert!(find("device", "explode").is_none());
    }
}
