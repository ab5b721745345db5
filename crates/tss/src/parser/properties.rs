//! Property validators and declaration dispatch.
//!
//! Each validator is a pure function from value tokens to a parsed value
//! or a [`ValidationError`]. Dispatch is a closed match on the declaration
//! name, so the supported property set is checked exhaustively at compile
//! time.

use std::sync::Arc;

use crate::error::ValidationError;
use crate::parser::tokenize::Token;
use crate::parser::units;
use crate::styles::Styles;
use crate::types::{
    Axis, Color, EasingRegistry, Layout, LayoutRegistry, Scalar, Spacing, Transition,
};

/// Validates one declaration and applies it to `styles`.
///
/// Declarations are applied strictly in encounter order: a shorthand
/// rewrites all the sides it covers, a per-side property rewrites one, and
/// whichever came later wins.
pub(crate) fn apply_declaration(
    styles: &mut Styles,
    name: &str,
    name_token: &Token,
    value: &[&Token],
    layouts: &LayoutRegistry,
    easings: &EasingRegistry,
) -> Result<(), ValidationError> {
    match name {
        "color" => styles.color = Some(color_value(name_token, value)?),
        "background" => styles.background = Some(color_value(name_token, value)?),
        "layout" => styles.layout = Some(layout_value(name_token, value, layouts)?),
        "offset" => {
            let (x, y) = offset_value(name_token, value)?;
            styles.offset.x = x;
            styles.offset.y = y;
        }
        "offset-x" => styles.offset.x = scalar_value(name_token, value, Axis::Width)?,
        "offset-y" => styles.offset.y = scalar_value(name_token, value, Axis::Height)?,
        "margin" => styles.margin = spacing_value(name_token, value)?,
        "margin-top" => styles.margin.top = side_value(name_token, value)?,
        "margin-right" => styles.margin.right = side_value(name_token, value)?,
        "margin-bottom" => styles.margin.bottom = side_value(name_token, value)?,
        "margin-left" => styles.margin.left = side_value(name_token, value)?,
        "padding" => styles.padding = spacing_value(name_token, value)?,
        "padding-top" => styles.padding.top = side_value(name_token, value)?,
        "padding-right" => styles.padding.right = side_value(name_token, value)?,
        "padding-bottom" => styles.padding.bottom = side_value(name_token, value)?,
        "padding-left" => styles.padding.left = side_value(name_token, value)?,
        "opacity" => styles.opacity = opacity_value(name_token, value)?,
        "transition" => {
            let (property, transition) = transition_value(name_token, value, easings)?;
            styles.transitions.insert(property, transition);
        }
        _ => {
            return Err(ValidationError::new(
                name_token,
                format!("unknown declaration {name:?}"),
            ));
        }
    }
    Ok(())
}

/// Expects exactly one value token.
fn single<'a>(name_token: &Token, value: &[&'a Token]) -> Result<&'a Token, ValidationError> {
    match value {
        [token] => Ok(token),
        [] => Err(missing_value(name_token)),
        [_, extra, ..] => Err(ValidationError::new(
            extra,
            format!("unexpected token {:?}", extra.value),
        )),
    }
}

fn missing_value(name_token: &Token) -> ValidationError {
    ValidationError::new(
        name_token,
        format!(
            "missing value for {:?}",
            name_token.value.trim_end_matches(':')
        ),
    )
}

/// Joins the value tokens back into a color string and delegates to the
/// color model. Whitespace has already been filtered out, which is what
/// `rgb(...)` forms split across tokens rely on.
fn color_value(name_token: &Token, value: &[&Token]) -> Result<Color, ValidationError> {
    if value.is_empty() {
        return Err(missing_value(name_token));
    }
    let text: String = value.iter().map(|token| token.value.as_str()).collect();
    Color::parse(&text).map_err(|error| ValidationError::new(value[0], error.to_string()))
}

fn layout_value(
    name_token: &Token,
    value: &[&Token],
    layouts: &LayoutRegistry,
) -> Result<Arc<dyn Layout>, ValidationError> {
    let token = single(name_token, value)?;
    layouts.get(&token.value).ok_or_else(|| {
        ValidationError::new(
            token,
            format!(
                "unknown layout {:?}; valid layouts are {}",
                token.value,
                layouts.names().join(", ")
            ),
        )
    })
}

fn scalar_token(token: &Token, axis: Axis) -> Result<Scalar, ValidationError> {
    units::scalar(&token.value, axis).ok_or_else(|| {
        ValidationError::new(token, format!("invalid scalar value {:?}", token.value))
    })
}

fn scalar_value(
    name_token: &Token,
    value: &[&Token],
    axis: Axis,
) -> Result<Scalar, ValidationError> {
    scalar_token(single(name_token, value)?, axis)
}

/// `offset: <x> <y>` — x resolves against width, y against height.
fn offset_value(name_token: &Token, value: &[&Token]) -> Result<(Scalar, Scalar), ValidationError> {
    match value {
        [x, y] => Ok((scalar_token(x, Axis::Width)?, scalar_token(y, Axis::Height)?)),
        [] => Err(missing_value(name_token)),
        _ => Err(ValidationError::new(
            name_token,
            "offset expects two values: <x> <y>",
        )),
    }
}

fn side_token(token: &Token) -> Result<i32, ValidationError> {
    units::integer(&token.value).ok_or_else(|| {
        ValidationError::new(
            token,
            format!("expected a whole number of cells, found {:?}", token.value),
        )
    })
}

fn side_value(name_token: &Token, value: &[&Token]) -> Result<i32, ValidationError> {
    side_token(single(name_token, value)?)
}

/// Spacing shorthand: one value for all sides, two for vertical/horizontal,
/// or four for top/right/bottom/left.
fn spacing_value(name_token: &Token, value: &[&Token]) -> Result<Spacing, ValidationError> {
    let sides = value
        .iter()
        .map(|token| side_token(token))
        .collect::<Result<Vec<i32>, _>>()?;
    match sides.as_slice() {
        [all] => Ok(Spacing::all(*all)),
        [vertical, horizontal] => Ok(Spacing::vertical_horizontal(*vertical, *horizontal)),
        [top, right, bottom, left] => Ok(Spacing::new(*top, *right, *bottom, *left)),
        [] => Err(missing_value(name_token)),
        _ => Err(ValidationError::new(
            name_token,
            "spacing expects 1, 2, or 4 values",
        )),
    }
}

/// Opacity is numeric or percent, clamped to `[0.0, 1.0]` rather than
/// rejected when out of range.
fn opacity_value(name_token: &Token, value: &[&Token]) -> Result<f64, ValidationError> {
    let token = single(name_token, value)?;
    let fraction = units::fraction(&token.value).ok_or_else(|| {
        ValidationError::new(token, format!("invalid value for opacity: {:?}", token.value))
    })?;
    Ok(fraction.clamp(0.0, 1.0))
}

/// `transition: <property> <duration> <easing> [<delay>]`.
fn transition_value(
    name_token: &Token,
    value: &[&Token],
    easings: &EasingRegistry,
) -> Result<(String, Transition), ValidationError> {
    let [property, duration, easing, rest @ ..] = value else {
        return Err(ValidationError::new(
            name_token,
            "transition expects <property> <duration> <easing> [<delay>]",
        ));
    };
    let duration_seconds = units::seconds(&duration.value).ok_or_else(|| {
        ValidationError::new(duration, format!("invalid duration {:?}", duration.value))
    })?;
    if !easings.contains(&easing.value) {
        return Err(ValidationError::new(
            easing,
            format!("unknown easing function {:?}", easing.value),
        ));
    }
    let delay = match rest {
        [] => 0.0,
        [delay] => units::seconds(&delay.value).ok_or_else(|| {
            ValidationError::new(delay, format!("invalid delay {:?}", delay.value))
        })?,
        [_, extra, ..] => {
            return Err(ValidationError::new(
                extra,
                format!("unexpected token {:?}", extra.value),
            ));
        }
    };
    Ok((
        property.value.clone(),
        Transition::new(duration_seconds, easing.value.clone(), delay),
    ))
}
