//! Route paths of the admin UI

use crate::admin::state::AdminUser;

pub const SIGN_IN_ROUTE: &str = "/signin";
pub const WIZARD_ROUTE: &str = "/wizard";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Where a freshly authenticated admin lands: accounts without any role go
/// through the onboarding wizard first.
pub fn landing_route(user: &AdminUser) -> &'static str {
  if user.has_roles() {
    DASHBOARD_ROUTE
  } else {
    WIZARD_ROUTE
  }
}
