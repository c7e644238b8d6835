//! Sample callables covering the parameter-kind edge cases.

#![allow(dead_code)]

use argus_runtime::{Callable, CodeObject, FunctionObject, SignatureBuilder};
use std::sync::Arc;

fn build(builder: SignatureBuilder) -> Callable {
    let code = builder
        .filename("samples.py")
        .finish()
        .expect("sample signature is valid");
    Callable::from_code(code)
}

/// `def no_args()`
pub fn no_args() -> Callable {
    build(SignatureBuilder::new("no_args"))
}

/// `def one_flex(value)`
pub fn one_flex() -> Callable {
    build(SignatureBuilder::new("one_flex").param("value"))
}

/// `def one_varpos(*items)`
pub fn one_varpos() -> Callable {
    build(SignatureBuilder::new("one_varpos").var_positional("items"))
}

/// `def one_kwonly(*, label)`
pub fn one_kwonly() -> Callable {
    build(SignatureBuilder::new("one_kwonly").keyword_only("label"))
}

/// `def two_flex(a, b)`
pub fn two_flex() -> Callable {
    build(SignatureBuilder::new("two_flex").param("a").param("b"))
}

/// `def flex_then_kwonly(a, *, b)`
pub fn flex_then_kwonly() -> Callable {
    build(
        SignatureBuilder::new("flex_then_kwonly")
            .param("a")
            .keyword_only("b"),
    )
}

/// `def collectors(*args, **kwargs)`
pub fn collectors() -> Callable {
    build(
        SignatureBuilder::new("collectors")
            .var_positional("args")
            .var_keyword("kwargs"),
    )
}

/// `def varkw_named_b(**b)`
pub fn varkw_named_b() -> Callable {
    build(SignatureBuilder::new("varkw_named_b").var_keyword("b"))
}

/// `def flex_optional_varkw(path, mode='r', **options)`
pub fn flex_optional_varkw() -> Callable {
    build(
        SignatureBuilder::new("flex_optional_varkw")
            .param("path")
            .param_default("mode")
            .var_keyword("options"),
    )
}

/// `def everything(x, y, *rest, flag=False, **extra)`
pub fn everything() -> Callable {
    build(
        SignatureBuilder::new("everything")
            .param("x")
            .param("y")
            .var_positional("rest")
            .keyword_only_default("flag")
            .var_keyword("extra"),
    )
}

/// A `(*args, **kwargs)` forwarding wrapper around `inner`.
pub fn forwarding(inner: Callable) -> Callable {
    let code: CodeObject = SignatureBuilder::new("wrapper")
        .qualname("decorate.<locals>.wrapper")
        .var_positional("args")
        .var_keyword("kwargs")
        .finish()
        .expect("forwarding signature is valid");
    Callable::from(FunctionObject::wrapping(Arc::new(code), inner))
}
