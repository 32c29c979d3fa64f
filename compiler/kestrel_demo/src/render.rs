//! Render a tiny syntax tree back to source, one node at a time.
//!
//! Each node kind is a user-declared type below `Node`; the renderer is a
//! `TypeDispatch` with one case per kind. The tree is walked breadth first
//! and the per-node fragments are concatenated.

use std::collections::VecDeque;
use std::sync::Arc;

use kestrel_match::{handler, nullary, DispatchError, Dispatcher, Pattern, Signature, TypeDispatch};
use kestrel_value::{TypeId, TypeTable, TypeTableError, Value};

/// Node kinds of the demo tree.
#[derive(Copy, Clone, Debug)]
pub struct NodeTypes {
    pub module: TypeId,
    pub function_def: TypeId,
    pub arguments: TypeId,
    pub ret: TypeId,
    pub bin_op: TypeId,
    pub constant: TypeId,
    pub add: TypeId,
}

impl NodeTypes {
    pub fn declare(types: &mut TypeTable) -> Result<Self, TypeTableError> {
        let node = types.declare("Node", TypeId::ANY)?;
        Ok(NodeTypes {
            module: types.declare("Module", node)?,
            function_def: types.declare("FunctionDef", node)?,
            arguments: types.declare("Arguments", node)?,
            ret: types.declare("Return", node)?,
            bin_op: types.declare("BinOp", node)?,
            constant: types.declare("Constant", node)?,
            add: types.declare("Add", node)?,
        })
    }
}

fn field<'v>(node: &'v Value, name: &str) -> Result<&'v Value, DispatchError> {
    node.as_object()
        .and_then(|obj| obj.get_field(name))
        .ok_or_else(|| DispatchError::raised("render", format!("node has no field `{name}`")))
}

fn first(args: &[Value]) -> Result<&Value, DispatchError> {
    args.first()
        .ok_or_else(|| DispatchError::raised("render", "missing node"))
}

/// Build the renderer for `kinds`.
pub fn renderer(types: Arc<TypeTable>, kinds: NodeTypes) -> Result<TypeDispatch, DispatchError> {
    let mut render = TypeDispatch::new("render", types);

    render.register(Pattern::scalar(kinds.module), nullary("module", || Ok(Value::string(""))))?;
    render.case(handler(
        "function_def",
        Signature::of_types(&[kinds.function_def]),
        |args, _| {
            let name = field(first(args)?, "name")?;
            Ok(Value::string(format!("def {}(", name.as_str().unwrap_or("?"))))
        },
    ))?;
    render.case(handler(
        "arguments",
        Signature::of_types(&[kinds.arguments]),
        |args, _| {
            let names = field(first(args)?, "args")?
                .as_seq()
                .unwrap_or_default()
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(",");
            Ok(Value::string(format!("{names}):\n")))
        },
    ))?;
    render.case(handler(
        "return",
        Signature::of_types(&[kinds.ret]),
        |_, _| Ok(Value::string("    return ")),
    ))?;
    render.case(handler(
        "bin_op",
        Signature::of_types(&[kinds.bin_op]),
        |_, _| Ok(Value::string("")),
    ))?;
    render.case(handler(
        "constant",
        Signature::of_types(&[kinds.constant]),
        |args, _| Ok(Value::string(field(first(args)?, "value")?.to_string())),
    ))?;
    render.register(Pattern::scalar(kinds.add), nullary("add", || Ok(Value::string(" + "))))?;

    Ok(render)
}

/// Nodes of `root` in breadth-first order, following each node's
/// `children` list.
pub fn walk(root: &Value) -> Vec<Value> {
    let mut order = Vec::new();
    let mut queue = VecDeque::from([root.clone()]);
    while let Some(node) = queue.pop_front() {
        if let Some(children) = node
            .as_object()
            .and_then(|obj| obj.get_field("children"))
            .and_then(Value::as_seq)
        {
            queue.extend(children.iter().cloned());
        }
        order.push(node);
    }
    order
}

/// Render every node of `root` and join the fragments.
pub fn render_tree(render: &TypeDispatch, root: &Value) -> Result<String, DispatchError> {
    let mut out = String::new();
    for node in walk(root) {
        let fragment = render.apply(vec![node])?;
        out.push_str(fragment.as_str().unwrap_or_default());
    }
    Ok(out)
}

/// `def helo(): return 1 + 1` as a tree.
pub fn sample_tree(kinds: NodeTypes) -> Value {
    let node = |ty: TypeId, mut fields: Vec<(&'static str, Value)>, children: Vec<Value>| {
        fields.push(("children", Value::list(children)));
        Value::object(ty, fields)
    };
    let one = || node(kinds.constant, vec![("value", Value::int(1))], vec![]);

    let sum = node(
        kinds.bin_op,
        vec![],
        vec![one(), node(kinds.add, vec![], vec![]), one()],
    );
    let ret = node(kinds.ret, vec![], vec![sum]);
    let arguments = node(kinds.arguments, vec![("args", Value::list(vec![]))], vec![]);
    let def = node(
        kinds.function_def,
        vec![("name", Value::string("helo"))],
        vec![arguments, ret],
    );
    node(kinds.module, vec![], vec![def])
}
