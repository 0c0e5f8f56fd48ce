//! Account signup.

use folio_core::{RenderRequest, RenderResult};
use folio_streaming::{BufferedResponder, Response};
use folio_widgets::{Alert, Button, ButtonType, Form, Fragment, Input, Widget};

use crate::context::ViewContext;
use crate::services::Services;
use crate::view::View;

/// Signup form, or an error alert when `features.signups` is off.
///
/// Input: optional `username` and `email` to prefill after a failed attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignupView;

impl SignupView {
    fn input(
        ctx: &ViewContext,
        input_type: &str,
        name: &str,
        label: &str,
        value: Option<&str>,
    ) -> RenderResult<Fragment> {
        let mut input = ctx.create::<Input>()?.name(name).label(label).required();
        input.configure("type", input_type.into())?;
        if let Some(value) = value {
            input.configure("value", value.into())?;
        }
        Ok(input.render())
    }
}

impl View for SignupView {
    fn name(&self) -> &'static str {
        "signup"
    }

    fn main(&self, services: &Services, request: &RenderRequest) -> RenderResult<Response> {
        let mut ctx = ViewContext::new(self.name());

        if !services.config.features.signups {
            let alert = ctx
                .create::<Alert>()?
                .context("danger")
                .text(&services.translate("Signing up is disabled."))
                .render();
            ctx.append(&alert)?;
            return ctx.send(BufferedResponder::json());
        }

        let fields = Fragment::concat([
            Self::input(
                &ctx,
                "text",
                "username",
                &services.translate("Username"),
                request.opt_str("username"),
            )?,
            Self::input(
                &ctx,
                "email",
                "email",
                &services.translate("Email"),
                request.opt_str("email"),
            )?,
            Self::input(
                &ctx,
                "password",
                "password",
                &services.translate("Password"),
                None,
            )?,
            ctx.create::<Button>()?
                .context("primary")
                .button_type(ButtonType::Submit)
                .text(&services.translate("Sign up"))
                .render(),
        ]);

        let form = ctx
            .create::<Form>()?
            .id("form-signup")
            .action("signup")
            .html(fields)
            .render();

        ctx.append(&form)?;
        ctx.send(BufferedResponder::json())
    }
}
