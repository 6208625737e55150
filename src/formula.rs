//! DrawingML shape guide formulas (`<a:gd name="x1" fmla="*/ w adj1 100000"/>`).
//!
//! Angles are expressed in 60000ths of a degree. Evaluation never fails: an
//! unknown operator or a non-finite result is logged and stored as 0.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::units::parse_int;

pub type Env = HashMap<String, f64>;

const ANGLE_UNIT: f64 = 60_000.0;

fn to_radians(angle: f64) -> f64 {
    angle / ANGLE_UNIT * PI / 180.0
}

fn from_radians(rad: f64) -> f64 {
    rad * 180.0 / PI * ANGLE_UNIT
}

/// A guide argument: a name already in `env`, else an integer literal.
pub fn resolve_token(token: &str, env: &Env) -> f64 {
    if let Some(v) = env.get(token) {
        return *v;
    }
    match parse_int(token) {
        Some(n) => n as f64,
        None => {
            log::warn!("unknown guide token {token:?}, using 0");
            0.0
        }
    }
}

/// Evaluate `formula`, store the result under `name` and return it.
pub fn evaluate(name: &str, formula: &str, env: &mut Env) -> f64 {
    let mut parts = formula.split_whitespace();
    let op = parts.next().unwrap_or("");
    let args: Vec<f64> = parts.map(|t| resolve_token(t, env)).collect();
    let arg = |i: usize| args.get(i).copied().unwrap_or(0.0);
    let (x, y, z) = (arg(0), arg(1), arg(2));

    let result = match op {
        "*/" => x * y / z,
        "+-" => x + y - z,
        "+/" => (x + y) / z,
        "?:" => {
            if x != 0.0 {
                y
            } else {
                z
            }
        }
        "abs" => x.abs(),
        "at2" => from_radians(y.atan2(x)),
        "cat2" => x * z.atan2(y).cos(),
        "sat2" => x * z.atan2(y).sin(),
        "cos" => x * to_radians(y).cos(),
        "sin" => x * to_radians(y).sin(),
        "tan" => x * to_radians(y).tan(),
        "max" => x.max(y),
        "min" => x.min(y),
        "mod" => (x * x + y * y + z * z).sqrt(),
        "pin" => {
            if y < x {
                x
            } else if y > z {
                z
            } else {
                y
            }
        }
        "sqrt" => x.sqrt(),
        "val" => x,
        other => {
            log::warn!("unknown guide operator {other:?} in {name} = {formula:?}");
            0.0
        }
    };

    let result = if result.is_finite() {
        result
    } else {
        log::warn!("guide {name} = {formula:?} is not a number, using 0");
        0.0
    };
    env.insert(name.to_string(), result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Env {
        let mut env = Env::new();
        env.insert("w".into(), 200.0);
        env.insert("h".into(), 100.0);
        env.insert("ss".into(), 100.0);
        env.insert("cd4".into(), 5_400_000.0);
        env
    }

    #[test]
    fn arithmetic_operators() {
        let mut env = env();
        assert_eq!(evaluate("a", "*/ w 16667 100000", &mut env), 200.0 * 16667.0 / 100000.0);
        assert_eq!(evaluate("b", "+- w h 50", &mut env), 250.0);
        assert_eq!(evaluate("c", "+/ w h 3", &mut env), 100.0);
        assert_eq!(env["b"], 250.0);
        assert_eq!(evaluate("d", "val 42", &mut env), 42.0);
        assert_eq!(evaluate("e", "pin 0 75000 50000", &mut env), 50000.0);
        assert_eq!(evaluate("f", "?: 0 w h", &mut env), 100.0);
        assert_eq!(evaluate("g", "mod 3 4 0", &mut env), 5.0);
    }

    #[test]
    fn trigonometry_uses_sixty_thousandths() {
        let mut env = env();
        let v = evaluate("s", "sin w cd4", &mut env);
        assert!((v - 200.0).abs() < 1e-9);
        let a = evaluate("t", "at2 0 h", &mut env);
        assert!((a - 5_400_000.0).abs() < 1e-6);
    }

    #[test]
    fn failures_store_zero() {
        let mut env = env();
        assert_eq!(evaluate("u", "frob 1 2", &mut env), 0.0);
        assert_eq!(evaluate("v", "*/ w h 0", &mut env), 0.0);
        assert_eq!(evaluate("x", "+- nope 1 0", &mut env), 1.0);
        assert_eq!(env["u"], 0.0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut env = env();
        let first = evaluate("k", "cat2 w h ss", &mut env);
        let second = evaluate("k2", "cat2 w h ss", &mut env);
        assert_eq!(first, second);
    }
}
