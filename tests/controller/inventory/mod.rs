mod get_inventory_item;
