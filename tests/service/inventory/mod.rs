mod get_quantity;
