mod scaling;
mod ticks;
