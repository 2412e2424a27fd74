mod clone;
mod debug;
mod from;
mod from_iter;
