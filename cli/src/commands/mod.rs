mod helpers;
mod meal;
mod shopping;
mod suggest;
mod week;

pub(crate) use meal::{cmd_add, cmd_clear, cmd_delete, cmd_edit, cmd_move};
pub(crate) use shopping::{
    cmd_shop_add, cmd_shop_adjust, cmd_shop_list, cmd_shop_remove, cmd_shop_set_bought,
};
pub(crate) use suggest::cmd_suggest;
pub(crate) use week::cmd_week;
