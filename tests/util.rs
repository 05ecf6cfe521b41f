#[path = "util/cores.rs"]
mod cores;
#[path = "util/cpu_list.rs"]
mod cpu_list;
